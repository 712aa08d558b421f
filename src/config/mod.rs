pub mod toml_config;

use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "meal-max-smoke")]
#[command(about = "Smoke test runner for the meal_max API")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000/api")]
    pub base_url: String,

    #[arg(long, help = "Pretty-print JSON response bodies")]
    pub echo_json: bool,

    #[arg(long, default_value_t = 5)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Final settings for the run. File values win for fields they set;
    /// `--echo-json` on the command line always takes effect.
    pub fn resolve(&self, file: Option<&toml_config::SmokeFileConfig>) -> ResolvedConfig {
        let base_url = file
            .map(|f| f.server.base_url.clone())
            .unwrap_or_else(|| self.base_url.clone());
        let timeout_seconds = file
            .and_then(|f| f.server.timeout_seconds)
            .unwrap_or(self.timeout_seconds);
        let echo_json = self.echo_json
            || file
                .and_then(|f| f.output.as_ref())
                .and_then(|o| o.echo_json)
                .unwrap_or(false);

        ResolvedConfig {
            base_url,
            timeout_seconds,
            echo_json,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn echo_json(&self) -> bool {
        self.echo_json
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_url("base_url", &self.base_url)?;
        crate::utils::validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

/// Effective configuration after merging CLI flags and an optional file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub echo_json: bool,
}

impl ConfigProvider for ResolvedConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn echo_json(&self) -> bool {
        self.echo_json
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
