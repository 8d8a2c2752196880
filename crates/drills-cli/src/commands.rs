use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use tracing::info;

use drills_currency::Formatter;
use drills_loss::LossOutcome;
use drills_merge::{BoundPolicy, Interval, MergeResult, Merger};

use crate::cli::*;
use crate::config::DrillsConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        format,
        config,
        ..
    } = cli;
    let config = DrillsConfig::load_or_default(config.as_deref())?;

    match command {
        Command::Merge(args) => cmd_merge(args, &config, format),
        Command::Cipher(args) => cmd_cipher(args, &config, format),
        Command::Currency(args) => cmd_currency(args, &config, format),
        Command::Loss(args) => cmd_loss(args, format),
    }
}

fn cmd_merge(args: MergeArgs, config: &DrillsConfig, format: OutputFormat) -> anyhow::Result<()> {
    let (left, right) = match (&args.left, &args.right) {
        (Some(left), Some(right)) => (read_intervals(left)?, read_intervals(right)?),
        _ => sample_intervals()?,
    };

    let mut merge_config = config.merge.clone();
    if args.extend_bounds {
        merge_config.bounds = BoundPolicy::Extend;
    }
    let (merged, stats) = Merger::new(merge_config).merge_with_stats(&left, &right);
    info!(inputs = stats.inputs, merges = stats.merges, "intervals merged");

    match format {
        OutputFormat::Text => {
            for entry in &merged {
                println!("{}", render_interval(entry));
            }
            println!(
                "{} {} in, {} out, {} merged",
                "✓".green(),
                stats.inputs,
                stats.outputs.to_string().bold(),
                stats.merges
            );
        }
        OutputFormat::Json => {
            let doc = json!({ "intervals": merged, "stats": stats });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn cmd_cipher(args: CipherArgs, config: &DrillsConfig, format: OutputFormat) -> anyhow::Result<()> {
    let shift = args.shift.unwrap_or(config.cipher.shift);
    let encoded = drills_cipher::encode(&args.message, shift);
    let decoded = drills_cipher::decode(&encoded, shift);

    match format {
        OutputFormat::Text => {
            println!("Encoded: {}", encoded.yellow());
            println!("Decoded: {}", decoded);
        }
        OutputFormat::Json => {
            let doc = json!({ "shift": shift, "encoded": encoded, "decoded": decoded });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn cmd_currency(
    args: CurrencyArgs,
    config: &DrillsConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut currency_config = config.currency.clone();
    if let Some(digits) = args.fraction_digits {
        currency_config.fraction_digits = digits;
    }
    let formatted = Formatter::new(currency_config)
        .format(args.amount)
        .with_context(|| format!("cannot format {}", args.amount))?;

    match format {
        OutputFormat::Text => println!("Formatted Indian Currency: {}", formatted.bold()),
        OutputFormat::Json => {
            let doc = json!({ "amount": args.amount, "formatted": formatted });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn cmd_loss(args: LossArgs, format: OutputFormat) -> anyhow::Result<()> {
    let outcome = drills_loss::minimum_loss(&args.prices);

    match format {
        OutputFormat::Text => match &outcome {
            Some(outcome) => println!("{}", render_loss(outcome)),
            None => println!("{} No year is followed by a lower price.", "✗".red()),
        },
        OutputFormat::Json => {
            let doc = json!({ "prices": args.prices, "outcome": outcome });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn read_intervals(path: &Path) -> anyhow::Result<Vec<Interval>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read intervals from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid interval list in {}", path.display()))
}

/// The two lists used when no input files are given.
fn sample_intervals() -> MergeResult<(Vec<Interval>, Vec<Interval>)> {
    let left = vec![Interval::new(0, 5, vec![1, 2])?, Interval::new(6, 10, vec![3])?];
    let right = vec![Interval::new(4, 8, vec![7])?, Interval::new(10, 15, vec![8, 9])?];
    Ok((left, right))
}

fn render_interval(entry: &Interval) -> String {
    let values: Vec<String> = entry.values().iter().map(i64::to_string).collect();
    format!(
        "Positions: [{}, {}] Values: {}",
        entry.start(),
        entry.end(),
        values.join(" ")
    )
}

fn render_loss(outcome: &LossOutcome) -> String {
    format!(
        "Buy in Year {}, Sell in Year {}, Minimum Loss = {}",
        outcome.buy_year, outcome.sell_year, outcome.loss
    )
}
