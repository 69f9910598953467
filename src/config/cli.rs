use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gift-floor")]
#[command(about = "Find the cheapest gift listings across Tonnel, Portals and MRKT")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the pricing API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print option lists as HTML fragments (with dropdown images)
    #[arg(long)]
    pub html: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all gift collections
    Collections,

    /// List model, backdrop and symbol options for a collection
    Options {
        #[arg(short, long)]
        gift: String,
    },

    /// Search the floor price for a collection with optional filters
    Floor {
        #[arg(short, long)]
        gift: String,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        backdrop: Option<String>,

        #[arg(long)]
        symbol: Option<String>,

        /// Write the rendered HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl CliConfig {
    /// 載入設定檔（若有）、套用命令列覆蓋並驗證
    pub fn resolve(&self) -> Result<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        }
        .with_base_url(self.base_url.clone());

        config.validate()?;

        match &self.command {
            Command::Options { gift } | Command::Floor { gift, .. } => {
                validation::validate_non_empty_string("gift", gift)?;
            }
            Command::Collections => {}
        }

        Ok(config)
    }
}
