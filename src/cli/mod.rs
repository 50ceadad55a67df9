// src/cli/mod.rs
use clap::Parser;

use crate::core::config::{parse_log_level, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Secure password generator API", long_about = None)]
pub struct Args {
    /// Address to bind the API server to
    #[arg(long)]
    pub address: Option<String>,

    /// API server port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Base URL of the breach range API
    #[arg(long)]
    pub breach_api_url: Option<String>,
}

impl Args {
    /// Command line values take precedence over the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(address) = &self.address {
            config.web_address = address.clone();
        }
        if let Some(port) = self.port {
            config.web_port = port;
        }
        if let Some(level) = self.log_level.as_deref().and_then(parse_log_level) {
            config.log_level = level;
        }
        if let Some(url) = &self.breach_api_url {
            config.breach_api_url = url.clone();
        }
    }
}
