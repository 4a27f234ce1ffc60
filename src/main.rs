use anyhow::Result;
use clap::Parser;
use colored::*;
use dirsize::cli::Cli;
use dirsize::report::Report;
use dirsize::scanner::Scanner;
use dirsize::types::{Summary, Totals};
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate path
    if !cli.path.exists() {
        eprintln!(
            "{} Path does not exist: {}",
            "Error:".red().bold(),
            cli.path.display()
        );
        std::process::exit(1);
    }

    if !cli.path.is_dir() {
        eprintln!(
            "{} Path is not a directory: {}",
            "Error:".red().bold(),
            cli.path.display()
        );
        std::process::exit(1);
    }

    let options = cli.options()?;

    let scanner = Scanner::new(options.max_depth)
        .with_verbose(options.verbose)
        .with_progress(!options.verbose);

    let summaries = match scanner.scan(&options.root) {
        Ok(summaries) => summaries,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if options.verbose {
        print_totals(&summaries);
    }

    let report = Report::build(&summaries, &options.report);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;

    Ok(())
}

fn print_totals(summaries: &[Summary]) {
    let totals = summaries
        .iter()
        .fold(Totals::default(), |acc, s| acc + s.totals);

    eprintln!(
        "Scanned {} files in {} directories ({} bytes), skipped {} entries",
        totals.files.to_string().green().bold(),
        totals.dirs.to_string().green().bold(),
        totals.bytes.to_string().cyan(),
        totals.skipped.to_string().yellow()
    );
}
