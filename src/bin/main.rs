use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ipa_core::config::{load_settings, Settings, DEFAULT_SETTINGS_FILE};
use ipa_core::core::types::{PronUnit, UnitKind};
use ipa_core::dataset::load_dataset;
use ipa_core::harness::{evaluate, EvaluationOptions, Report, Summary};
use ipa_core::persistence::{compare_reports, load_snapshot, save_snapshot, Drift};
use ipa_core::Transcriber;

#[derive(Parser)]
#[command(name = "ipa_engine")]
#[command(about = "Predict phonemic transcriptions from spelling")]
#[command(version)]
struct Cli {
    /// Settings file path
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe one or more words
    Transcribe {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show tokens, resolved units and per-unit phonemes for a word
    Inspect {
        word: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare predictions against a reference dataset
    Evaluate {
        /// Dataset file (JSON array of {word, pronunciation})
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Drop words that cannot be transcribed instead of listing them
        #[arg(long)]
        drop_errors: bool,

        /// Snapshot of the previous run to compare against, replaced afterwards
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },

    /// Read words from stdin, one per line. Type 'exit' to quit.
    Repl,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let settings = load_settings(&config_path)
        .with_context(|| format!("loading settings from {}", config_path.display()))?;
    init_tracing(&settings.log_filter);

    let transcriber = Transcriber::new();

    match cli.command {
        Commands::Transcribe { words } => Ok(transcribe_words(&transcriber, &words)),
        Commands::Inspect { word, json } => {
            inspect(&transcriber, &word, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Evaluate { dataset, json, drop_errors, snapshot } => {
            run_evaluation(&transcriber, &settings, dataset, snapshot, json, drop_errors)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Repl => {
            repl(&transcriber)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(fallback_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn transcribe_words(transcriber: &Transcriber, words: &[String]) -> ExitCode {
    let mut all_ok = true;
    for word in words {
        match transcriber.transcribe(word) {
            Ok(ipa) => println!("{}\t{}", word, ipa),
            Err(e) => {
                eprintln!("{}", format!("{}: {}", word, e).red());
                all_ok = false;
            }
        }
    }
    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn inspect(transcriber: &Transcriber, word: &str, json: bool) -> Result<()> {
    let analysis = transcriber.analyze(word)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("Word:   {}", word.bold());
    println!("Tokens: {}", analysis.tokens.join(" | "));
    println!("Units:");
    for (unit, phoneme) in analysis.units.iter().zip(&analysis.phonemes) {
        println!("  {:<3} {:<40} -> {}", unit.letter, describe(unit), phoneme);
    }
    println!("IPA:    {}", analysis.ipa().green());
    Ok(())
}

fn describe(unit: &PronUnit) -> String {
    match unit.kind {
        UnitKind::Consonant { class, form, voicing } => {
            format!("consonant class={:?} form={:?} voicing={:?}", class, form, voicing)
        }
        UnitKind::Vowel => "vowel".to_string(),
        UnitKind::Digraph => "digraph".to_string(),
    }
}

#[derive(Serialize)]
struct EvaluationOutput<'a> {
    summary: Summary,
    accuracy: Option<f64>,
    drift: Option<&'a Drift>,
    report: &'a Report,
}

fn run_evaluation(
    transcriber: &Transcriber,
    settings: &Settings,
    dataset: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    json: bool,
    drop_errors: bool,
) -> Result<()> {
    let dataset_path = dataset
        .or_else(|| settings.dataset_path.clone())
        .context("no dataset given; pass --dataset or set dataset_path in the settings file")?;
    let entries = load_dataset(&dataset_path)
        .with_context(|| format!("loading dataset {}", dataset_path.display()))?;

    let options = EvaluationOptions { record_errors: settings.record_errors && !drop_errors };
    let report = evaluate(transcriber, &entries, options);

    let snapshot_path = snapshot.or_else(|| settings.snapshot_path.clone());
    let drift = match snapshot_path.as_deref() {
        Some(path) if path.exists() => {
            let previous = load_snapshot(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            Some(compare_reports(&previous, &report))
        }
        _ => None,
    };

    if json {
        let output = EvaluationOutput {
            summary: report.summary(),
            accuracy: report.accuracy(),
            drift: drift.as_ref(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&report, drift.as_ref());
    }

    if let Some(path) = snapshot_path.as_deref() {
        save_snapshot(&report, path)
            .with_context(|| format!("saving snapshot {}", path.display()))?;
        eprintln!("Snapshot saved to '{}'", path.display());
    }
    Ok(())
}

fn print_report(report: &Report, drift: Option<&Drift>) {
    println!("{}", "Matches".green().bold());
    for o in &report.successes {
        println!("  {}  {}  {}", o.word, o.guessed, o.actual.as_str().dark_grey());
    }
    println!("\n{}", "Mismatches".red().bold());
    for o in &report.failures {
        println!("  {}  guessed {}  expected {}", o.word, o.guessed.as_str().red(), o.actual);
    }
    if !report.errored.is_empty() {
        println!("\n{}", "Not transcribable".yellow().bold());
        for e in &report.errored {
            println!("  {}  {}", e.word, e.reason.as_str().dark_grey());
        }
    }

    if let Some(drift) = drift {
        println!("\n{}", "Since last snapshot".bold());
        for w in &drift.regressions {
            println!("  {} {}", "-".red(), w);
        }
        for w in &drift.fixes {
            println!("  {} {}", "+".green(), w);
        }
        if drift.is_empty() {
            println!("  no changes");
        }
    }

    let summary = report.summary();
    println!();
    println!("successes: {}", summary.successes);
    println!("failures:  {}", summary.failures);
    println!("errored:   {}", summary.errored);
    if let Some(accuracy) = report.accuracy() {
        println!("accuracy:  {:.1}%", accuracy * 100.0);
    }
}

fn repl(transcriber: &Transcriber) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let input = line?;
        let word = input.trim();
        match word {
            "exit" => break,
            "" => {}
            w => match transcriber.transcribe(w) {
                Ok(ipa) => println!("{}", ipa.green()),
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}
