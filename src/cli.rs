//! Command-line interface, built on clap.
//!
//! Defines [`Cli`] with the [`Command`] subcommands (demo, jobs).

use clap::{Parser, Subcommand};

/// KarirKita, a virtual career marketplace simulator.
#[derive(Debug, Parser)]
#[command(name = "karirkita", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Runs the scripted marketplace walkthrough: deposit, take a gig,
    /// submit, get evaluated.
    Demo {
        /// Worker display name for the demo session.
        #[arg(long, default_value = "Andi Pratama")]
        name: String,
    },

    /// Fetches and prints a job board.
    Jobs {
        /// Career level the listings should target.
        #[arg(long, default_value_t = 1)]
        level: u32,
    },
}
