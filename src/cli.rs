use crate::types::{Divisor, Options, ReportOptions, DEFAULT_MAX_DEPTH};
use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirsize")]
#[command(author = "Dirsize Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Show the disk space used by each entry of a directory", long_about = None)]
#[command(after_help = "Current directory is used if no path is specified")]
pub struct Cli {
    /// Directory to report on (defaults to current directory)
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Display file sizes in bytes
    #[arg(short = 'b')]
    pub bytes: bool,

    /// Display file sizes in multiples of 1000 bytes
    #[arg(short = 'k')]
    pub kilo: bool,

    /// Display file sizes in multiples of 1024 bytes (default)
    #[arg(short = 'x')]
    pub kibi: bool,

    /// Display only the top <N> entries; show all if negative
    #[arg(short = 'n', value_name = "N", default_value_t = -1, allow_negative_numbers = true)]
    pub top: i64,

    /// Display only entries greater than <P>%; show all if negative
    #[arg(short = 'p', value_name = "P", default_value_t = -1, allow_negative_numbers = true)]
    pub percent: i64,

    /// Display only entries up to <C>% cumulative; show all if negative
    #[arg(short = 'c', value_name = "C", default_value_t = -1, allow_negative_numbers = true)]
    pub cumulative: i64,

    /// Suppress the file type suffix (/, @, =)
    #[arg(short = 'F')]
    pub no_suffix: bool,

    /// Maximum recursion depth
    #[arg(short = 'R', value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Print per-entry counts and totals to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Unit base selected by the size flags; -x wins over -b, which wins over -k
    pub fn divisor(&self) -> Divisor {
        if self.kibi {
            Divisor::Binary
        } else if self.bytes {
            Divisor::Bytes
        } else if self.kilo {
            Divisor::Decimal
        } else {
            Divisor::default()
        }
    }

    /// Build the run configuration, resolving the path against the working directory
    pub fn options(&self) -> Result<Options> {
        let root = if self.path.is_absolute() {
            self.path.clone()
        } else {
            env::current_dir()
                .context("Failed to determine current directory")?
                .join(&self.path)
        };

        Ok(Options {
            root,
            max_depth: self.max_depth,
            verbose: self.verbose,
            report: ReportOptions {
                divisor: self.divisor(),
                top_n: usize::try_from(self.top).ok(),
                percent_floor: non_negative(self.percent),
                cumulative_ceiling: non_negative(self.cumulative),
                show_suffix: !self.no_suffix,
            },
        })
    }
}

fn non_negative(value: i64) -> Option<f64> {
    (value >= 0).then_some(value as f64)
}
