//! CLI module for the AI ServiceNow Consultancy API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the API server

pub mod serve;

use clap::{Parser, Subcommand};

/// AI ServiceNow Consultancy API - complexity-routed LLM gateway
#[derive(Parser)]
#[command(name = "snc-ai-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
