//! Command line entry points
//!
//! - `serve`: run the HTTP API (default)
//! - `seed-teams`: replace all teams with the sample roster
//! - `seed-user`: create an operator account if it does not exist
//! - `timer`: count down a presentation and its Q&A in the terminal

pub mod seed;
pub mod serve;
pub mod timer;

use clap::{Parser, Subcommand};

/// Team presentation order randomizer
#[derive(Parser)]
#[command(name = "teamdraw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve,

    /// Delete every team and insert the sample roster
    SeedTeams,

    /// Create an operator account
    SeedUser(seed::SeedUserArgs),

    /// Count down a presentation followed by its Q&A
    Timer(timer::TimerArgs),
}
