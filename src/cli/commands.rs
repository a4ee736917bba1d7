// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API (default)
    Serve,

    /// Analyze a password entered at a hidden prompt
    Analyze {
        /// Skip the breach corpus lookup
        #[arg(long)]
        offline: bool,
    },

    /// Generate a password
    Generate(GenerateArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Allow look-alike characters such as l, I, O, 0 and 1
    #[arg(long)]
    pub allow_similar: bool,
}
