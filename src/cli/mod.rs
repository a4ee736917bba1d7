// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port (overrides WEB_PORT)
    #[arg(long)]
    pub api_port: Option<u16>,
}
