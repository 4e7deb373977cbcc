// src/cli/mod.rs
//! Command-line front end.

pub mod args;
pub mod handlers;

pub use args::Cli;
