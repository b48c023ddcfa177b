//! CLI module for the classroom registry

pub mod serve;

use clap::{Parser, Subcommand};

/// Classroom registry - teacher/student registrations and notifications
#[derive(Parser)]
#[command(name = "classroom-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
