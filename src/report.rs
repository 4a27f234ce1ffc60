use crate::types::{Divisor, ReportOptions, Summary};
use crate::utils::{format_size, percent_of};
use std::io::{self, Write};

/// One displayed line of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub bytes: u64,
    pub percent: f64,
    pub cumulative: u64,
    pub cumulative_percent: f64,
    pub name: String,
    pub suffix: &'static str,
}

/// Entries cut from the report by the selection options
#[derive(Debug, Clone, PartialEq)]
pub struct Omitted {
    pub count: usize,
    pub bytes: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub omitted: Option<Omitted>,
    pub total: u64,
    divisor: Divisor,
}

impl Report {
    /// Select and annotate rows from summaries already sorted largest first.
    pub fn build(summaries: &[Summary], options: &ReportOptions) -> Self {
        let total: u64 = summaries.iter().map(Summary::bytes).sum();

        let mut rows = Vec::new();
        let mut cumulative = 0u64;
        let mut remaining = summaries.len();

        for (index, summary) in summaries.iter().enumerate() {
            let bytes = summary.bytes();
            let percent = percent_of(bytes, total);
            let cumulative_percent = percent_of(cumulative + bytes, total);

            // A cutoff never hides just a single trailing entry
            if remaining > 1 && Self::cut_off(index, percent, cumulative_percent, options) {
                break;
            }

            cumulative += bytes;
            rows.push(ReportRow {
                bytes,
                percent,
                cumulative,
                cumulative_percent,
                name: summary.name(),
                suffix: if options.show_suffix {
                    summary.kind.suffix()
                } else {
                    ""
                },
            });
            remaining -= 1;
        }

        let omitted = (remaining > 0).then(|| Omitted {
            count: remaining,
            bytes: total - cumulative,
            percent: percent_of(total - cumulative, total),
        });

        Self {
            rows,
            omitted,
            total,
            divisor: options.divisor,
        }
    }

    fn cut_off(index: usize, percent: f64, cumulative_percent: f64, options: &ReportOptions) -> bool {
        if let Some(top_n) = options.top_n {
            if index >= top_n {
                return true;
            }
        }
        if let Some(floor) = options.percent_floor {
            if percent < floor {
                return true;
            }
        }
        if let Some(ceiling) = options.cumulative_ceiling {
            if cumulative_percent > ceiling {
                return true;
            }
        }
        false
    }

    /// Write the tab-separated rows followed by the omission line, if any
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let size = |bytes: u64| format_size(bytes, self.divisor);

        for row in &self.rows {
            writeln!(
                out,
                "{}\t{:3.0}%\t{}\t{:3.0}%\t{}{}",
                size(row.bytes),
                row.percent,
                size(row.cumulative),
                row.cumulative_percent,
                row.name,
                row.suffix
            )?;
        }

        if let Some(ref omitted) = self.omitted {
            writeln!(
                out,
                "Omitting {} lines representing {} bytes, {:.0}% of total bytes",
                omitted.count,
                size(omitted.bytes),
                omitted.percent
            )?;
        }

        Ok(())
    }
}
