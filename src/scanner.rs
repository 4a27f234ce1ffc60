use crate::types::{EntryKind, Summary, Totals};
use crate::walker::Walker;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use walkdir::WalkDir;

pub struct Scanner {
    walker: Walker,
    verbose: bool,
    progress: Option<ProgressBar>,
}

impl Scanner {
    pub fn new(max_depth: usize) -> Self {
        Self {
            walker: Walker::new(max_depth),
            verbose: false,
            progress: None,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Show a spinner on stderr naming the entry being measured
    pub fn with_progress(mut self, enabled: bool) -> Self {
        if !enabled {
            self.progress = None;
            return self;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} entries {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        self.walker = Walker::new(self.walker.max_depth()).with_progress(pb.clone());
        self.progress = Some(pb);
        self
    }

    /// Measure every immediate child of `root`, largest first.
    ///
    /// Only a failure to list `root` itself is returned as an error. Children
    /// that cannot be inspected are logged and reported with zero size.
    pub fn scan(&self, root: &Path) -> Result<Vec<Summary>> {
        let mut results = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if e.depth() == 0 => {
                    return Err(e)
                        .with_context(|| format!("Failed to read directory: {}", root.display()));
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    let failed = unreadable_child(e.path());
                    self.walker.warn(&path, &anyhow::Error::from(e));
                    results.extend(failed);
                    continue;
                }
            };

            let kind = EntryKind::from_file_type(entry.file_type());
            let mut summary = Summary::new(entry.path().to_path_buf(), kind);

            if let Some(ref pb) = self.progress {
                pb.set_message(summary.name());
                pb.inc(1);
            }

            match kind {
                EntryKind::File => match entry.metadata() {
                    Ok(metadata) => summary.merge(Totals::file(metadata.len())),
                    Err(e) => self.walker.warn(entry.path(), &anyhow::Error::from(e)),
                },
                EntryKind::Dir => match self.walker.visit(entry.path(), 0) {
                    Ok(totals) => summary.merge(totals),
                    Err(e) => self.walker.warn(entry.path(), &e),
                },
                EntryKind::Symlink | EntryKind::Other => summary.merge(Totals::skipped()),
            }

            if self.verbose {
                self.log_entry(&summary);
            }

            results.push(summary);
        }

        if let Some(ref pb) = self.progress {
            pb.finish_and_clear();
        }

        // Stable: equal sizes keep their listing order
        results.sort_by(|a, b| b.bytes().cmp(&a.bytes()));

        Ok(results)
    }

    fn log_entry(&self, summary: &Summary) {
        let print = || {
            eprintln!(
                "  {}{}: {} bytes, {} files, {} dirs, {} skipped",
                summary.name(),
                summary.kind.suffix(),
                summary.totals.bytes,
                summary.totals.files,
                summary.totals.dirs,
                summary.totals.skipped
            )
        };

        match &self.progress {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }
}

/// Zero-sized placeholder for a child whose directory entry could not be read
fn unreadable_child(path: Option<&Path>) -> Option<Summary> {
    path.map(|p| Summary::new(p.to_path_buf(), EntryKind::Other))
}
