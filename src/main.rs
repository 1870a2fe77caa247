//! Quill - a small static blog generator with pluggable rendering policies.

#![allow(dead_code)]

mod cli;
mod config;
mod dom;
mod logger;
mod plugin;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Check => cli::check::check_site(&config),
    }
}
