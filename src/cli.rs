use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::HostOverrides;
use commands::serve;

#[derive(Parser)]
#[command(name = "smartcharge")]
#[command(about = "Serves the SmartCharge single-page app bundle")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the static host
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000).
        /// Defaults to 0.0.0.0:8080 when neither this flag, the
        /// environment nor the config file set it.
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory holding the built frontend (`trunk build` output)
        ///
        /// Defaults to workspace/frontend/dist.
        #[arg(short, long, env = "DIST_DIR")]
        dist_dir: Option<String>,

        /// Optional TOML file with `bind_address` and `dist_dir`
        #[arg(short, long, env = "SMARTCHARGE_CONFIG", default_value = "smartcharge.toml")]
        config: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, dist_dir, config } => {
                let overrides = HostOverrides { bind_address, dist_dir };
                serve(&config, overrides).await?;
            }
        }
        Ok(())
    }
}
