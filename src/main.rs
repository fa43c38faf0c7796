//! Korean phone number CLI.
//!
//! This binary provides a command-line interface for the kr-phone library:
//! validating numbers given as arguments, validating files line by line and
//! scanning free text for numbers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kr_phone::{PhoneValidator, ValidationResult};

/// Korean Phone Number Validator
///
/// Validate, normalize and format Korean mobile and landline numbers.
#[derive(Parser)]
#[command(name = "kr-phone")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print results as JSON (one object per line)
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    options: ValidatorOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy, Default)]
struct ValidatorOptions {
    /// Skip sequential/repeated/test-number heuristics
    #[arg(long, global = true)]
    no_heuristics: bool,

    /// Omit the advisory carrier/region label
    #[arg(long, global = true)]
    no_carrier: bool,

    /// Restore a missing leading 0 (spreadsheet exports)
    #[arg(long, global = true)]
    repair_trunk_prefix: bool,
}

impl ValidatorOptions {
    fn build(self) -> PhoneValidator {
        PhoneValidator::new()
            .with_heuristics(!self.no_heuristics)
            .with_carrier_labels(!self.no_carrier)
            .with_trunk_prefix_repair(self.repair_trunk_prefix)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate phone numbers given as arguments
    Check {
        /// Phone numbers to validate
        #[arg(required = true, value_name = "NUMBER")]
        numbers: Vec<String>,
    },

    /// Validate a file with one phone number per line
    Batch {
        /// Input text file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file for JSON lines (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Find and validate phone numbers inside free text
    Scan {
        /// Input text file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

/// Command handler holding the configured validator.
struct ValidationHandler {
    validator: PhoneValidator,
    json: bool,
}

impl ValidationHandler {
    fn new(validator: PhoneValidator, json: bool) -> Self {
        Self { validator, json }
    }

    /// Renders one result for terminal output.
    fn render(&self, result: &ValidationResult) -> Result<String> {
        if self.json {
            return serde_json::to_string(result).context("Failed to serialize result");
        }

        if result.is_valid {
            let mut line = format!("✓ {} → {} ({}", result.raw, result.formatted, result.class);
            if let Some(carrier) = &result.carrier {
                line.push_str(&format!(", {}", carrier));
            }
            line.push(')');
            Ok(line)
        } else {
            let errors: Vec<String> = result.errors.iter().map(ToString::to_string).collect();
            Ok(format!("✗ {}: {}", result.raw, errors.join("; ")))
        }
    }

    fn check(&self, numbers: &[String]) -> Result<()> {
        let results = self.validator.validate_batch(numbers);
        for result in &results {
            println!("{}", self.render(result)?);
        }

        let invalid = results.iter().filter(|r| !r.is_valid).count();
        if invalid > 0 {
            anyhow::bail!("{} of {} phone number(s) invalid", invalid, results.len());
        }

        Ok(())
    }

    fn batch(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        ensure_exists(input)?;
        let results = self
            .validator
            .validate_file(input)
            .with_context(|| "Batch validation failed")?;

        let mut body = String::new();
        for result in &results {
            body.push_str(&serde_json::to_string(result).context("Failed to serialize result")?);
            body.push('\n');
        }

        let valid = results.iter().filter(|r| r.is_valid).count();
        info!(total = results.len(), valid, "batch validated");

        match output {
            Some(path) => {
                fs::write(path, &body)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!(
                    "✓ Validated {} number(s), {} valid → {}",
                    results.len(),
                    valid,
                    path.display()
                );
            }
            None => {
                std::io::stdout()
                    .write_all(body.as_bytes())
                    .context("Failed to write to stdout")?;
            }
        }

        Ok(())
    }

    fn scan(&self, input: &Path) -> Result<()> {
        ensure_exists(input)?;
        let text = kr_phone::input::read_input(input).with_context(|| "Scan failed")?;
        debug!(chars = text.len(), input = %input.display(), "scanning text");
        let results = self.validator.scan(&text);

        if results.is_empty() {
            println!("⚠ No phone numbers found");
            return Ok(());
        }

        for result in &results {
            println!("{}", self.render(result)?);
        }
        Ok(())
    }
}

fn ensure_exists(input: &Path) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let handler = ValidationHandler::new(cli.options.build(), cli.json);

    match &cli.command {
        Commands::Check { numbers } => handler.check(numbers)?,
        Commands::Batch { input, output } => handler.batch(input, output.as_deref())?,
        Commands::Scan { input } => handler.scan(input)?,
    }

    Ok(())
}
