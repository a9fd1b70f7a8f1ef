//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// sitecheck - Validation for static documentation sites.
#[derive(Debug, Parser)]
#[command(name = "sitecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Path to policy file (overrides sitecheck.yml in the project root)
    #[arg(long, global = true, env = "SITECHECK_POLICY")]
    pub policy: Option<PathBuf>,

    /// Report format (human, json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as failures
    #[arg(long, global = true)]
    pub strict: bool,

    /// Minimal output: hide informational diagnostics and status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the site configuration file
    ValidateConfig(ValidateConfigArgs),

    /// Validate markdown content
    ValidateContent(ValidateContentArgs),

    /// Check that required tools are installed
    ValidateEnv,

    /// Validate configuration and content (default if no command specified)
    Validate(ValidateArgs),
}

/// Arguments for the `validate-config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateConfigArgs {
    /// Config file (default: hugo.toml, config.toml, ... in the project root)
    pub path: Option<PathBuf>,
}

/// Arguments for the `validate-content` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateContentArgs {
    /// Content directory (default: <project>/content)
    pub path: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Config file to validate
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Content directory to validate
    #[arg(long)]
    pub content: Option<PathBuf>,
}
