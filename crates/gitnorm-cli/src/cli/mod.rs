//! Argument parsing and dispatch for both binaries.

mod commands;

use anyhow::Result;
use clap::Parser;
use gitnorm_core::config::{self, GitnormConfig};

pub use commands::{env_value, resolve_style, run_normalize, run_table};

/// Normalize a Git remote URL to HTTPS format.
#[derive(Debug, Parser)]
#[command(name = "git-url-norm")]
#[command(about = "Normalize a Git remote URL to HTTPS format", long_about = None)]
pub struct NormalizeArgs {
    /// The git remote URL to normalize.
    #[arg(value_name = "URL", conflicts_with = "url_flag")]
    pub url: Option<String>,

    /// The git remote URL to normalize (alternative to the positional form).
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url_flag: Option<String>,

    /// Keep embedded credentials (default: public URL).
    #[arg(short = 'p', long)]
    pub private: bool,
}

impl NormalizeArgs {
    /// The URL from whichever form was used.
    pub fn remote_url(&self) -> Option<&str> {
        self.url.as_deref().or(self.url_flag.as_deref())
    }

    /// Credentials are dropped unless `--private` was given.
    pub fn public(&self) -> bool {
        !self.private
    }

    pub fn run_from_args() -> Result<()> {
        let args = Self::parse();
        run_normalize(args.remote_url(), args.public())
    }
}

/// Print environment variables as a bordered table.
#[derive(Debug, Parser)]
#[command(name = "print-vars-table")]
#[command(
    about = "Print environment variables as a table",
    long_about = "Print environment variables as a table.\n\n\
                  Border characters can be overridden with EDGE_COL_CHAR, MID_COL_CHAR and HR_CHAR."
)]
pub struct TableArgs {
    /// Names of the environment variables to show, in order. Any string is accepted.
    #[arg(value_name = "NAME", allow_hyphen_values = true, trailing_var_arg = true)]
    pub names: Vec<String>,
}

impl TableArgs {
    /// Never fails on bad arguments: clap's message goes to the terminal and
    /// nothing is rendered.
    pub fn run_from_args() -> Result<()> {
        let args = match Self::try_parse() {
            Ok(args) => args,
            Err(err) => {
                let _ = err.print();
                return Ok(());
            }
        };
        let cfg = load_config();
        let style = resolve_style(cfg.table, env_value);
        run_table(&args.names, &style)
    }
}

/// Read the optional config, falling back to defaults so a bad file never fails a run.
fn load_config() -> GitnormConfig {
    match config::load() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            GitnormConfig::default()
        }
    }
}

#[cfg(test)]
mod tests;
