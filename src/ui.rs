//! Terminal presentation: spinners and colored output.
//!
//! Uses `indicatif` for progress spinners around the Gemini calls and
//! `console` for styling. [`MarketView`] renders the wallet, the job board,
//! and submission outcomes.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::market::{Job, Rupiah, SubmissionOutcome, UserState, Wallet};

/// Formats an amount as Indonesian Rupiah with dot-grouped thousands,
/// e.g. `Rp 150.000`.
pub fn format_rupiah(amount: Rupiah) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Spinner shown while a Gemini round is in flight.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// Colored terminal renderer for session state.
pub struct MarketView {
    green: Style,
    red: Style,
    yellow: Style,
    dim: Style,
}

impl Default for MarketView {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketView {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }

    /// Balance plus the transaction history, newest first.
    pub fn print_wallet(&self, wallet: &Wallet) {
        println!();
        println!(
            "Total Balance: {}",
            self.green.apply_to(format_rupiah(wallet.balance()))
        );
        if wallet.transactions().is_empty() {
            println!("  {}", self.dim.apply_to("No transaction history found"));
            return;
        }
        for tx in wallet.transactions() {
            let amount = if tx.amount > 0 {
                self.green.apply_to(format!("+{}", format_rupiah(tx.amount)))
            } else {
                self.red.apply_to(format_rupiah(tx.amount))
            };
            println!(
                "  {} {} {}  {}",
                self.dim.apply_to(tx.date.format("%d %b %Y %H:%M")),
                self.dim.apply_to(format!("[{}]", tx.kind)),
                amount,
                tx.description
            );
        }
    }

    /// The open job board.
    pub fn print_board<'a>(&self, jobs: impl Iterator<Item = &'a Job>) {
        println!();
        println!("{}", self.green.apply_to("─── Open Marketplace ───"));
        let mut any = false;
        for job in jobs {
            any = true;
            println!(
                "  {} {} | {} [{} | {}]",
                self.yellow.apply_to("•"),
                job.title,
                self.green.apply_to(format_rupiah(job.reward)),
                job.category,
                job.difficulty,
            );
            println!("    {}", self.dim.apply_to(&job.description));
        }
        if !any {
            println!("  {}", self.dim.apply_to("Waiting for new opportunities..."));
        }
    }

    /// Career summary for the worker side.
    pub fn print_resume(&self, user: &UserState) {
        println!();
        println!(
            "Lvl {}  |  rating {:.1}  |  {} gigs completed  |  {} XP",
            user.career_level, user.profile.rating, user.profile.jobs_completed, user.experience
        );
    }

    pub fn print_outcome(&self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::AutoApproved { reward, feedback } => {
                println!(
                    "  {} Submission approved, earned {}: {feedback}",
                    self.green.apply_to("✓"),
                    format_rupiah(*reward)
                );
            }
            SubmissionOutcome::Rejected { feedback } => {
                println!(
                    "  {} Submission rejected, job reopened: {feedback}",
                    self.red.apply_to("✗")
                );
            }
            SubmissionOutcome::AwaitingReview => {
                println!(
                    "  {} Submission sent to the employer for approval",
                    self.yellow.apply_to("…")
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(50_000), "Rp 50.000");
        assert_eq!(format_rupiah(150_000), "Rp 150.000");
        assert_eq!(format_rupiah(1_234_567), "Rp 1.234.567");
    }

    #[test]
    fn format_rupiah_negative() {
        assert_eq!(format_rupiah(-80_000), "-Rp 80.000");
    }
}
