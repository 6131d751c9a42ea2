use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use incident_enrich::classify::{MatchKind, classify_detailed};
use incident_enrich::convert::{ConvertOptions, convert_file};
use incident_enrich::counties::{County, aliases_of};
use incident_enrich::dates::{DateSource, normalize_detailed};
use incident_enrich::{Resolved, Result};

#[derive(Parser)]
#[command(
    name = "incident_enrich",
    about = "Enrich incident records with county, year and month"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a CSV of incident records to enriched JSON Lines (+ JSON array)
    Convert {
        /// Input CSV with a header row
        #[arg(long = "in", value_name = "CSV")]
        input: PathBuf,
        /// JSON Lines output
        #[arg(long = "out", default_value = "missing_voices.jsonl")]
        out_jsonl: PathBuf,
        /// JSON array output
        #[arg(long = "out-json", default_value = "missing_voices.json")]
        out_json: PathBuf,
        /// Skip the JSON array output
        #[arg(long)]
        no_json: bool,
    },
    /// Infer the county for a piece of text, e.g. "Kibera, Nairobi"
    Classify {
        /// Text to classify (all words are joined)
        text: Vec<String>,
    },
    /// Extract year and month from a date field, e.g. "20 June, 2025"
    Date {
        /// Structured timestamp, tried before the free text
        #[arg(long)]
        iso: Option<String>,
        /// Free-text date (all words are joined)
        text: Vec<String>,
    },
    /// Print the county catalog with its aliases
    Counties,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("incident_enrich=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Convert {
            input,
            out_jsonl,
            out_json,
            no_json,
        } => run_convert(ConvertOptions {
            input,
            jsonl: out_jsonl,
            json_array: (!no_json).then_some(out_json),
        }),
        Command::Classify { text } => run_classify(&text),
        Command::Date { iso, text } => run_date(iso.as_deref(), &text),
        Command::Counties => {
            run_counties();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  CONVERT MODE: CSV → JSONL (+ JSON array)
// ═══════════════════════════════════════════════════════════════════════

fn run_convert(opts: ConvertOptions) -> Result<()> {
    let stats = convert_file(&opts)?;
    match &opts.json_array {
        Some(array) => println!(
            "Wrote {} and {} ({} rows)",
            opts.jsonl.display(),
            array.display(),
            stats.rows
        ),
        None => println!("Wrote {} ({} rows)", opts.jsonl.display(), stats.rows),
    }
    eprintln!(
        "  county resolved: {}/{}, year resolved: {}/{}, skipped rows: {}",
        stats.with_county, stats.rows, stats.with_year, stats.rows, stats.skipped
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  INSPECTION MODES: run the engine on ad-hoc input, print JSON
// ═══════════════════════════════════════════════════════════════════════

fn run_classify(words: &[String]) -> Result<()> {
    let text = words.join(" ");
    let found = classify_detailed([Some(text.as_str())]);

    #[derive(serde::Serialize)]
    struct ClassifyResult<'a> {
        text: &'a str,
        county: Resolved<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        matched: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        via: Option<&'static str>,
    }

    let result = ClassifyResult {
        text: &text,
        county: Resolved::from(found.map(|m| m.county.name())),
        matched: found.map(|m| m.term),
        via: found.map(|m| match m.kind {
            MatchKind::Exact => "county name",
            MatchKind::Alias => "alias",
        }),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_date(iso: Option<&str>, words: &[String]) -> Result<()> {
    let text = words.join(" ");
    let found = normalize_detailed(iso, Some(text.as_str()));

    #[derive(serde::Serialize)]
    struct DateResult<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        iso: Option<&'a str>,
        text: &'a str,
        year: Resolved<i32>,
        month: Resolved<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        via: Option<&'static str>,
    }

    let result = DateResult {
        iso,
        text: &text,
        year: Resolved::from(found.map(|(ym, _)| ym.year)),
        month: Resolved::from(found.map(|(ym, _)| ym.month_name())),
        via: found.map(|(_, source)| match source {
            DateSource::Timestamp => "timestamp",
            DateSource::DayMonthYear => "day month year",
            DateSource::MonthYear => "month year",
            DateSource::YearMonth => "year-month",
        }),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  COUNTIES MODE: print the catalog
// ═══════════════════════════════════════════════════════════════════════

fn run_counties() {
    for county in County::ALL {
        let aliases = aliases_of(county);
        if aliases.is_empty() {
            println!("{county}");
        } else {
            println!("{county}: {}", aliases.join(", "));
        }
    }
    eprintln!(
        "\nTotal: {} counties, {} aliases",
        County::ALL.len(),
        incident_enrich::counties::ALIASES.len()
    );
}
