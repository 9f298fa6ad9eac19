use clap::{Parser, Subcommand};
use std::path::PathBuf;

use catalog_client::ClientConfig;
use catalog_client::config::DEFAULT_LISTINGS_PATH;

/// Catalog CLI - list, create, retire and diagnose marketplace listings
#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog service base URL
    #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:5000", global = true)]
    pub url: String,

    /// Bearer token for the catalog service
    #[arg(long, env = "CATALOG_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Listing collection path
    #[arg(
        long,
        env = "CATALOG_LISTINGS_PATH",
        default_value = DEFAULT_LISTINGS_PATH,
        global = true
    )]
    pub listings_path: String,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every listing
    List {
        /// Print the raw JSON snapshot instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create a listing
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long)]
        cost_price: f64,
        #[arg(long)]
        selling_price: f64,
        #[arg(long, default_value_t = 0)]
        stock: u32,
        #[arg(long, default_value_t = 0.0)]
        recycled: f64,
        /// Create the listing inactive
        #[arg(long)]
        inactive: bool,
        /// Image files to upload, in display order
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },

    /// Retire a listing (no confirmation prompt)
    Delete { id: String },

    /// Run the connectivity probe
    Diagnose,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.url)
            .with_timeout(self.timeout)
            .with_listings_path(&self.listings_path);
        match &self.token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}
