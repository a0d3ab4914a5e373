//! Subcommand implementations

pub mod linters;
pub mod lint;
