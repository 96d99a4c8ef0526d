//! # Playful BMI CLI
//!
//! Terminal shell over `bmi_core`. Height and weight come from flags; any
//! value not given on the command line is prompted for, with the configured
//! default used on an empty or unparseable answer.
//!
//! ```text
//! bmi_cli --feet 5 --inches 7 --pounds 165
//! bmi_cli --format json --no-prompt
//! ```

mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use bmi_core::{evaluate, ImperialMeasurement};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};

/// Playful BMI calculator (lbs/ft/in)
#[derive(Debug, Parser)]
#[command(name = "bmi_cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Height, whole feet (3-8)
    #[arg(long)]
    feet: Option<u32>,

    /// Height, remaining inches (0-11)
    #[arg(long)]
    inches: Option<u32>,

    /// Weight in pounds
    #[arg(long)]
    pounds: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, env = "BMI_CONFIG")]
    config: Option<PathBuf>,

    /// Use defaults for missing values instead of prompting
    #[arg(long)]
    no_prompt: bool,
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn prompt<T: FromStr + Copy + std::fmt::Display>(label: &str, default: T) -> T {
    print!("{} [{}]: ", label, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    parse_or(&input, default)
}

fn parse_or<T: FromStr>(input: &str, default: T) -> T {
    input.trim().parse().unwrap_or(default)
}

fn resolve<T: FromStr + Copy + std::fmt::Display>(flag: Option<T>, label: &str, default: T, interactive: bool) -> T {
    match flag {
        Some(value) => value,
        None if interactive => prompt(label, default),
        None => default,
    }
}

fn collect_input(cli: &Cli, config: &Config) -> ImperialMeasurement {
    let interactive = !cli.no_prompt;
    let needs_prompt = cli.feet.is_none() || cli.inches.is_none() || cli.pounds.is_none();
    if interactive && needs_prompt {
        println!("Playful BMI Calculator");
        println!("======================");
        println!("Enter height in feet/inches and weight in pounds.");
        println!();
    }

    let defaults = config.defaults;
    ImperialMeasurement::new(
        resolve(cli.feet, "Feet", defaults.feet, interactive),
        resolve(cli.inches, "Inches", defaults.inches, interactive),
        resolve(cli.pounds, "Pounds (lb)", defaults.pounds, interactive),
    )
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let format = cli.format.unwrap_or(config.format);
    let input = collect_input(cli, config);
    debug!(?input, ?format, "collected input");

    match evaluate(&input) {
        Ok(report) => {
            info!(bmi = report.result.value, category = report.category_name, "calculated");
            match format {
                OutputFormat::Text => {
                    println!();
                    print!("{}", render::render_text(&report)?);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            Err(e.into())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "bmi_cli", "--feet", "6", "--inches", "1", "--pounds", "180.5", "--format", "json", "--no-prompt",
        ])
        .unwrap();
        assert_eq!(cli.feet, Some(6));
        assert_eq!(cli.inches, Some(1));
        assert_eq!(cli.pounds, Some(180.5));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_prompt);
    }

    #[test]
    fn test_negative_feet_rejected_by_parser() {
        assert!(Cli::try_parse_from(["bmi_cli", "--feet", "-1"]).is_err());
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or("  72.5\n", 1.0), 72.5);
        assert_eq!(parse_or("\n", 165.0), 165.0);
        assert_eq!(parse_or("tall", 5u32), 5);
    }

    #[test]
    fn test_no_prompt_uses_config_defaults() {
        let cli = Cli::try_parse_from(["bmi_cli", "--no-prompt", "--pounds", "200"]).unwrap();
        let config = Config::default();
        let input = collect_input(&cli, &config);
        assert_eq!(input, ImperialMeasurement::new(5, 7, 200.0));
    }

    #[test]
    fn test_invalid_input_fails_run() {
        let cli = Cli::try_parse_from(["bmi_cli", "--no-prompt", "--inches", "12"]).unwrap();
        assert!(run(&cli, &Config::default()).is_err());
    }
}
