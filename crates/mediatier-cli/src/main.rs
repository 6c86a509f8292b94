//! mediatier CLI — media tier classification for JSON records.
//!
//! Commands:
//!   mediatier classify <file> [file...]   Print the tier of each record
//!   mediatier breakdown <file>            Print the full classification as JSON
//!   mediatier summary <dir>               Tier histogram over a directory of records
//!
//! Options (before the command):
//!   --config <file>    Settings JSON (defaults to $MEDIATIER_CONFIG)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mediatier_core::record::{load_record, scan_directory};
use mediatier_core::settings;
use mediatier_core::{MediaClassifier, MediaTier, RdfWrapper};

fn main() -> ExitCode {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config = take_config(&mut args);
    if args.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let settings = settings::load_or_default(config.as_deref());
    log::debug!(
        "mediatier: {} embeddable media prefixes configured",
        settings.embeddable_url_prefixes.len()
    );
    let classifier = MediaClassifier::new(&settings);

    match args[0].as_str() {
        "classify" => cmd_classify(&classifier, &args[1..]),
        "breakdown" => cmd_breakdown(&classifier, &args[1..]),
        "summary" => cmd_summary(&classifier, &args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("unknown command: {}", other);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

/// Remove `--config <file>` from the arguments; fall back to the environment.
fn take_config(args: &mut Vec<String>) -> Option<PathBuf> {
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        args.remove(pos);
        if pos < args.len() {
            return Some(PathBuf::from(args.remove(pos)));
        }
        eprintln!("--config needs a file; using defaults");
        return None;
    }
    std::env::var_os("MEDIATIER_CONFIG").map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_classify(classifier: &MediaClassifier, args: &[String]) -> ExitCode {
    if args.is_empty() {
        eprintln!("usage: mediatier classify <file> [file...]");
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for file in args {
        match load_record(file) {
            Ok(record) => {
                let rdf = RdfWrapper::new(&record);
                println!("{}  {}", rdf.about().unwrap_or(file.as_str()), classifier.classify(&rdf));
            }
            Err(e) => {
                eprintln!("{}: {}", file, e);
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn cmd_breakdown(classifier: &MediaClassifier, args: &[String]) -> ExitCode {
    let Some(file) = args.first() else {
        eprintln!("usage: mediatier breakdown <file>");
        return ExitCode::FAILURE;
    };

    let record = match load_record(file) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("{}: {}", file, e);
            return ExitCode::FAILURE;
        }
    };

    let classification = classifier.classify_with_breakdown(&RdfWrapper::new(&record));
    match serde_json::to_string_pretty(&classification) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to render classification: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_summary(classifier: &MediaClassifier, args: &[String]) -> ExitCode {
    let Some(dir) = args.first() else {
        eprintln!("usage: mediatier summary <dir>");
        return ExitCode::FAILURE;
    };
    if !Path::new(dir).is_dir() {
        eprintln!("not a directory: {}", dir);
        return ExitCode::FAILURE;
    }

    let mut histogram: BTreeMap<MediaTier, usize> = BTreeMap::new();
    let mut unreadable = 0;
    for loaded in scan_directory(dir) {
        match loaded.record {
            Ok(record) => *histogram.entry(classifier.classify_record(&record)).or_default() += 1,
            Err(_) => unreadable += 1,
        }
    }

    let total: usize = histogram.values().sum();
    println!("records: {}", total);
    for tier in MediaTier::ALL {
        println!("  {:<4} {}", tier, histogram.get(&tier).copied().unwrap_or(0));
    }
    if unreadable > 0 {
        println!("unreadable: {}", unreadable);
    }
    ExitCode::SUCCESS
}

fn print_usage() {
    println!("mediatier - media tier classification");
    println!();
    println!("usage: mediatier [--config <file>] <command> [args]");
    println!();
    println!("commands:");
    println!("  classify <file> [file...]   Print the tier of each record");
    println!("  breakdown <file>            Print the full classification as JSON");
    println!("  summary <dir>               Tier histogram over a directory of records");
}
