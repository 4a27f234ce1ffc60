use crate::types::{EntryKind, Totals};
use anyhow::{Context, Result};
use colored::*;
use indicatif::ProgressBar;
use std::fs;
use std::path::Path;

/// Depth-bounded recursive size aggregation
pub struct Walker {
    max_depth: usize,
    progress: Option<ProgressBar>,
}

impl Walker {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            progress: None,
        }
    }

    /// Route warnings around an active spinner so they don't garble it
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Aggregate everything below the directory `path`, which sits at `depth`.
    ///
    /// Directories deeper than the bound contribute nothing and are not
    /// counted as skipped. Failing to list `path` itself is an error; failures
    /// further down are logged and the affected entry counts as zero.
    pub fn visit(&self, path: &Path, depth: usize) -> Result<Totals> {
        if depth > self.max_depth {
            return Ok(Totals::default());
        }

        let entries = fs::read_dir(path)
            .with_context(|| format!("Failed to read directory: {}", path.display()))?;

        let mut totals = Totals {
            dirs: 1,
            ..Totals::default()
        };

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    self.warn(path, &anyhow::Error::from(e));
                    continue;
                }
            };

            let child = entry.path();
            let kind = match entry.file_type() {
                Ok(file_type) => EntryKind::from_file_type(file_type),
                Err(e) => {
                    self.warn(&child, &anyhow::Error::from(e));
                    continue;
                }
            };

            match kind {
                EntryKind::File => match entry.metadata() {
                    Ok(metadata) => totals += Totals::file(metadata.len()),
                    Err(e) => self.warn(&child, &anyhow::Error::from(e)),
                },
                EntryKind::Dir => match self.visit(&child, depth + 1) {
                    Ok(subtree) => totals += subtree,
                    Err(e) => self.warn(&child, &e),
                },
                EntryKind::Symlink | EntryKind::Other => totals += Totals::skipped(),
            }
        }

        Ok(totals)
    }

    pub fn warn(&self, path: &Path, err: &anyhow::Error) {
        let print = || {
            eprintln!(
                "{} {}: {:#}",
                "Warning:".yellow().bold(),
                path.display(),
                err
            )
        };

        match &self.progress {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }
}
