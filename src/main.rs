mod cli;
mod config;
mod error;
mod evaluate;
mod gemini;
mod listings;
mod market;
mod orchestrator;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use config::KarirConfig;
use gemini::GeminiClient;
use listings::ListingGenerator;
use market::{DepositMethod, JobDraft, MarketSession, UserProfile, UserRole};
use orchestrator::Marketplace;
use ui::{MarketView, Spinner, format_rupiah};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = KarirConfig::load()?;
    let client = if config.api_key.is_empty() {
        None
    } else {
        Some(GeminiClient::new(config.api_key.clone()))
    };

    match cli.command {
        Command::Demo { name } => run_demo(name, client, config).await,
        Command::Jobs { level } => show_jobs(level, client, config).await,
    }
}

/// Fetches a job board for the given career level and prints it.
async fn show_jobs(level: u32, client: Option<GeminiClient>, config: KarirConfig) -> Result<()> {
    let view = MarketView::new();
    let jobs = match &client {
        Some(client) => {
            let spinner = Spinner::start("Fetching job listings...");
            let result = ListingGenerator::generate_with_llm(
                client,
                &config.model,
                level,
                config.job_batch_size,
            )
            .await;
            spinner.finish();
            result?
        }
        None => ListingGenerator::fallback_listings(level),
    };
    view.print_board(jobs.iter());
    Ok(())
}

/// Scripted walkthrough of the whole marketplace: the worker flow with an
/// AI-evaluated gig, the employer flow with a posted job (reject, retry,
/// approve), and an abandoned gig returning to the board.
async fn run_demo(name: String, client: Option<GeminiClient>, config: KarirConfig) -> Result<()> {
    let view = MarketView::new();
    let session = MarketSession::with_role(UserProfile::named(&name), UserRole::Worker);
    let mut market = Marketplace::new(session, client, config);

    println!("Joining the marketplace as {name} (WORKER)");
    if market.is_offline() {
        println!("No API key configured: using the built-in job board.");
    }

    // --- Worker: top up, take a gig, get evaluated ---

    market.session.deposit(150_000, DepositMethod::Gopay)?;
    view.print_wallet(&market.session.user().wallet);

    let spinner = Spinner::start("Fetching job listings...");
    let refreshed = market.refresh_listings().await;
    spinner.finish();
    println!("Fetched {} listings", refreshed?);
    view.print_board(market.session.open_jobs());

    let Some(job) = market.session.open_jobs().min_by_key(|j| j.reward).cloned() else {
        println!("The board is empty; nothing to take.");
        return Ok(());
    };
    market.session.apply(job.id)?;
    if let Some(active) = market.session.active_job() {
        println!(
            "Working on \"{}\" for {}",
            active.title,
            format_rupiah(active.reward)
        );
    }

    let submission = "Deliverable attached: cleaned dataset with notes on outliers.";
    let spinner = Spinner::start("Submitting deliverable for evaluation...");
    let outcome = market.submit_active(submission).await;
    spinner.finish();
    view.print_outcome(&outcome?);
    view.print_resume(market.session.user());

    // --- Employer: post a job, reject the first cut, approve the second ---

    println!();
    println!("Switching to the EMPLOYER side");
    market.session.select_role(UserRole::Employer);
    let posted_id = market.session.post_job(JobDraft {
        title: "Logo refresh".to_string(),
        description: "Redraw our cafe logo with a flat, modern look.".to_string(),
        reward: 80_000,
        location: Some("Jakarta".to_string()),
        ..Default::default()
    })?;
    println!(
        "Posted \"Logo refresh\" for {} (reserved {}, available {})",
        format_rupiah(80_000),
        format_rupiah(market.session.reserved_funds()),
        format_rupiah(market.session.available_balance()),
    );

    market.session.select_role(UserRole::Worker);
    market.session.apply(posted_id)?;
    market.submit_active("First draft of the logo, rough lines.").await?;

    market.session.select_role(UserRole::Employer);
    for pending in market.session.pending_review() {
        println!(
            "Pending deliverable on \"{}\": {:?}",
            pending.title,
            pending.submission.as_deref().unwrap_or("")
        );
    }
    market.session.reject(posted_id)?;
    if let Some(job) = market.session.job(posted_id) {
        println!("Rejected the first draft; \"{}\" is {} again.", job.title, job.status);
    }

    market.session.select_role(UserRole::Worker);
    market.session.apply(posted_id)?;
    market.submit_active("Final logo, flat style, SVG and PNG.").await?;

    market.session.select_role(UserRole::Employer);
    let payment = market.session.approve(posted_id)?;
    println!(
        "Released payment of {}: {}",
        format_rupiah(-payment.amount),
        payment.description
    );

    // --- Worker: take another gig and walk away from it ---

    market.session.select_role(UserRole::Worker);
    if let Some(next) = market.session.open_jobs().min_by_key(|j| j.reward).cloned() {
        market.session.apply(next.id)?;
        market.session.abandon()?;
        println!();
        println!("Took \"{}\" and abandoned it; back on the board.", next.title);
    }

    view.print_wallet(&market.session.user().wallet);
    view.print_resume(market.session.user());
    println!("Job pool now holds {} jobs", market.session.jobs().len());
    let wallet = &market.session.user().wallet;
    println!(
        "Ledger check: balance {} matches the sum of {} transactions: {}",
        format_rupiah(wallet.balance()),
        wallet.transactions().len(),
        wallet.is_balanced()
    );
    Ok(())
}
