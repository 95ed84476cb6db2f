//! samd-diagnostics: pressure diagnostic demonstration.
//!
//! Prints the result record for `{"pressure_kpa": 150.0}`, or for the JSON
//! object given as the single command-line argument. Stdout carries only the
//! result; logs go to stderr or the log file.

use anyhow::{bail, Context, Result};

use samd_diagnostics::adapters::logging::init_tracing;
use samd_diagnostics::config::LogConfig;
use samd_diagnostics::{run_diagnostics, DiagnosticResult, InputRecord};

const DEMO_RECORD: &str = r#"{"pressure_kpa": 150.0}"#;
const USAGE: &str = "usage: samd-diagnostics [JSON_OBJECT]";

/// Pick the record text from the arguments (program name already skipped).
fn input_text<I>(args: I) -> Result<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let input = args.next();
    if args.next().is_some() {
        bail!(USAGE);
    }
    Ok(input.unwrap_or_else(|| DEMO_RECORD.to_string()))
}

fn diagnose(text: &str) -> Result<DiagnosticResult> {
    let record = InputRecord::from_json(text).context("parsing input record")?;
    Ok(run_diagnostics(&record))
}

fn main() -> Result<()> {
    let config = LogConfig::from_env().context("reading logging configuration")?;
    let _guard = init_tracing(&config).context("initializing logging")?;

    tracing::info!("Starting samd-diagnostics...");

    let text = input_text(std::env::args().skip(1))?;
    let result = diagnose(&text)?;
    println!("{}", result.to_json()?);

    tracing::info!("samd-diagnostics finished.");
    Ok(())
}
