//! CLI subcommand implementations for the rollcall binary.

pub mod extract_cmd;
pub mod input;
pub mod output;
