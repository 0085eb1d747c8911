//! CLI module for the verification service
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// Verification Service - statement ingestion and mock verification results
#[derive(Parser)]
#[command(name = "verification-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
