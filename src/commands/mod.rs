//! Subcommand implementations

pub mod scan;
pub mod status;
