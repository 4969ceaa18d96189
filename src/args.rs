//! Command line flags. Every flag overrides the matching config value.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug, Default)]
#[command(name = "catalog")]
#[command(version, about = "Terminal product catalog", long_about = None)]
pub struct Args {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Route of the first screen: main, categories or detail/<id>
    #[arg(long, short = 'r')]
    pub route: Option<String>,

    /// Artificial repository latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Make the first N fetches of each repository fail
    #[arg(long)]
    pub fail_first: Option<u32>,
}

impl Args {
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(route) = &self.route {
            config.ui.start_route = route.clone();
        }
        if let Some(latency_ms) = self.latency_ms {
            config.repository.latency_ms = latency_ms;
        }
        if let Some(fail_first) = self.fail_first {
            config.repository.fail_first = fail_first;
        }
    }
}
