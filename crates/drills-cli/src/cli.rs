use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "drills",
    about = "Small algorithm drills: interval merge, Caesar cipher, Indian currency, minimum loss",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with per-command defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge two interval lists by majority overlap
    Merge(MergeArgs),
    /// Encode and decode a message with a Caesar shift
    Cipher(CipherArgs),
    /// Format an amount with Indian digit grouping
    Currency(CurrencyArgs),
    /// Find the buy/sell years with the smallest loss
    Loss(LossArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// JSON array of intervals (defaults to the built-in sample)
    #[arg(long, requires = "right")]
    pub left: Option<PathBuf>,
    #[arg(long, requires = "left")]
    pub right: Option<PathBuf>,
    /// Grow merged entries' end bound to cover merged-in intervals
    #[arg(long)]
    pub extend_bounds: bool,
}

#[derive(Args)]
pub struct CipherArgs {
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: Option<i32>,
    pub message: String,
}

#[derive(Args)]
pub struct CurrencyArgs {
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    #[arg(long)]
    pub fraction_digits: Option<u32>,
}

#[derive(Args)]
pub struct LossArgs {
    #[arg(required = true, allow_negative_numbers = true)]
    pub prices: Vec<i64>,
}
