//! Disk usage of a directory's immediate children, aggregated recursively
//! and reported largest first.

pub mod cli;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod walker;
