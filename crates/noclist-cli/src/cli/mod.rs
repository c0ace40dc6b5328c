//! CLI for the NocList client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use noclist_core::config::{self, NocConfig};
use std::path::PathBuf;

use commands::{run_checksum, run_fetch, run_show_config};

/// Top-level CLI. Without a subcommand, fetches and prints the user ids.
#[derive(Debug, Parser)]
#[command(name = "noclist", version)]
#[command(about = "Fetch the NOC user list from the BADSEC server", long_about = None)]
pub struct Cli {
    /// Path to a config.toml (default: $XDG_CONFIG_HOME/noclist/config.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the server base URL, e.g. http://localhost:8888.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log progress at debug level on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the auth token, then the user ids, and print them as a JSON array.
    Fetch,

    /// Print the request checksum for a token.
    Checksum {
        /// Authentication token as returned by the auth endpoint.
        token: String,

        /// Resource path bound into the checksum (default: configured users path).
        #[arg(long)]
        path: Option<String>,
    },

    /// Print the effective configuration as TOML.
    Config,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn effective_config(&self) -> Result<NocConfig> {
        let mut cfg = config::load(self.config.as_deref())?;
        if let Some(url) = &self.base_url {
            cfg.base_url = url.clone();
            cfg.validate()?;
        }
        tracing::debug!("effective config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn run(&self) -> Result<()> {
        let cfg = self.effective_config()?;
        match &self.command {
            None | Some(CliCommand::Fetch) => run_fetch(cfg),
            Some(CliCommand::Checksum { token, path }) => {
                run_checksum(&cfg, token, path.as_deref())
            }
            Some(CliCommand::Config) => run_show_config(&cfg),
        }
    }
}
