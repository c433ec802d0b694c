//! Command-line harness

pub mod commands;
