//! # chatgrep CLI
//!
//! Command-line interface for the chatgrep library.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatgrep::ChatgrepError;
use chatgrep::cli::Args;
use chatgrep::format::{to_format_string, write_to_format};
use chatgrep::report::SearchStats;
use chatgrep::search::Searcher;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatgrepError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    chatgrep::logging::init(args.debug);

    let format = args.output_format()?;
    let searcher = Searcher::with_config(args.search_config())?;
    let outcome = searcher.search_archive(&args.archive, &args.author)?;

    match args.output {
        Some(ref path) => {
            write_to_format(&outcome.results, path, format)?;

            println!("📦 chatgrep v{}", env!("CARGO_PKG_VERSION"));
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("📂 Archive: {}", args.archive.display());
            println!("👤 Author:  {}", display_query(&args.author));
            println!("📄 Format:  {}", format);
            println!(
                "✅ {} lines in {} files saved to {}",
                outcome.stats.unique_lines,
                outcome.results.len(),
                path.display()
            );
        }
        None => {
            let report = to_format_string(&outcome.results, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }

    if args.stats {
        print_stats(&outcome.stats, total_start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn display_query(author: &str) -> &str {
    if author.is_empty() { "(any)" } else { author }
}

fn print_stats(stats: &SearchStats, seconds: f64) {
    eprintln!();
    eprintln!("📊 Summary:");
    eprintln!("   Extracted:  {} files", stats.entries_extracted);
    eprintln!("   Scanned:    {} top-level files", stats.entries_scanned);
    eprintln!("   Records:    {} found", stats.records_found);
    eprintln!("   Matched:    {} records", stats.records_matched);
    eprintln!(
        "   Unique:     {} lines ({:.1}% duplicates)",
        stats.unique_lines,
        stats.duplicate_ratio()
    );
    eprintln!("   Time:       {:.2}s", seconds);
}
