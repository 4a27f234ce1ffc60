use std::fs::FileType;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

/// Default recursion bound for the walker
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Classification of a directory entry, taken without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    File,
    Dir,
    Symlink,
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        }
    }

    /// One-character marker appended to names in the report
    pub fn suffix(&self) -> &'static str {
        match self {
            EntryKind::File => "",
            EntryKind::Dir => "/",
            EntryKind::Symlink => "@",
            EntryKind::Other => "=",
        }
    }
}

/// Byte and entry counts accumulated over a subtree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub bytes: u64,
    pub files: u64,
    pub dirs: u64,
    pub skipped: u64,
}

impl Totals {
    pub fn file(size: u64) -> Self {
        Self {
            bytes: size,
            files: 1,
            ..Self::default()
        }
    }

    pub fn skipped() -> Self {
        Self {
            skipped: 1,
            ..Self::default()
        }
    }

    pub fn merge(self, other: Totals) -> Self {
        Self {
            bytes: self.bytes + other.bytes,
            files: self.files + other.files,
            dirs: self.dirs + other.dirs,
            skipped: self.skipped + other.skipped,
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        self.merge(rhs)
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Totals) {
        *self = self.merge(rhs);
    }
}

/// Usage of one immediate child of the scanned root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub totals: Totals,
}

impl Summary {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        Self {
            path,
            kind,
            totals: Totals::default(),
        }
    }

    pub fn bytes(&self) -> u64 {
        self.totals.bytes
    }

    /// Base name of the entry, as shown in the report
    pub fn name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    pub fn merge(&mut self, totals: Totals) {
        self.totals += totals;
    }
}

/// Unit base used to scale byte counts for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Divisor {
    Bytes,
    Decimal,
    #[default]
    Binary,
}

impl Divisor {
    pub fn value(&self) -> u64 {
        match self {
            Divisor::Bytes => 1,
            Divisor::Decimal => 1000,
            Divisor::Binary => 1024,
        }
    }
}

/// Selection and rendering settings for the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub divisor: Divisor,
    pub top_n: Option<usize>,
    pub percent_floor: Option<f64>,
    pub cumulative_ceiling: Option<f64>,
    pub show_suffix: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            divisor: Divisor::default(),
            top_n: None,
            percent_floor: None,
            cumulative_ceiling: None,
            show_suffix: true,
        }
    }
}

/// Fully validated run configuration
#[derive(Debug, Clone)]
pub struct Options {
    pub root: PathBuf,
    pub max_depth: usize,
    pub verbose: bool,
    pub report: ReportOptions,
}

impl Options {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            max_depth: DEFAULT_MAX_DEPTH,
            verbose: false,
            report: ReportOptions::default(),
        }
    }
}
