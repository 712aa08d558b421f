use crate::core::check::CheckSpec;
use crate::core::{ApiTransport, ConfigProvider, Result};
use crate::utils::error::SmokeError;
use std::time::{Duration, Instant};
use url::Url;

/// Executes a list of checks strictly in order, stopping at the first
/// failing fatal check.
pub struct SmokeRunner<T: ApiTransport, C: ConfigProvider> {
    transport: T,
    config: C,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub checks_run: usize,
    pub duration: Duration,
}

impl<T: ApiTransport, C: ConfigProvider> SmokeRunner<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    pub async fn run(&self, checks: &[CheckSpec]) -> Result<RunSummary> {
        let started = Instant::now();

        for check in checks {
            self.run_check(check).await?;
        }

        Ok(RunSummary {
            checks_run: checks.len(),
            duration: started.elapsed(),
        })
    }

    async fn run_check(&self, check: &CheckSpec) -> Result<()> {
        let url = self.endpoint_url(&check.path)?;
        tracing::debug!("running check '{}': {} {}", check.name, check.method, url);

        let response = match self
            .transport
            .execute(check.method, url.as_str(), check.body.as_ref())
            .await
        {
            Ok(response) => response,
            Err(e) if !check.fatal => {
                tracing::warn!("check '{}' could not be issued, continuing: {}", check.name, e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match check.evaluate(&response) {
            Ok(()) => {
                tracing::info!("check '{}' passed", check.name);
                println!("✅ {}", check.name);
                if check.echo_body && self.config.echo_json() {
                    println!("{}", serde_json::to_string_pretty(&response.body)?);
                }
                Ok(())
            }
            Err(reason) if !check.fatal => {
                tracing::warn!("check '{}' failed (non-fatal): {}", check.name, reason);
                Ok(())
            }
            Err(reason) => {
                tracing::error!(
                    "check '{}' failed: {} (HTTP {}, body: {})",
                    check.name,
                    reason,
                    response.status,
                    response.body
                );
                let status_mismatch = check
                    .expect_status
                    .map_or(false, |expected| expected != response.status);
                if status_mismatch {
                    Err(SmokeError::UnexpectedStatus {
                        check: check.name.clone(),
                        status: response.status,
                        body: response.body.to_string(),
                    })
                } else {
                    Err(SmokeError::CheckFailed {
                        check: check.name.clone(),
                        reason: format!(
                            "{} (HTTP {}, body: {})",
                            reason, response.status, response.body
                        ),
                    })
                }
            }
        }
    }

    /// Joins the configured base URL with a check path. Url::parse
    /// percent-encodes path characters like spaces in meal names.
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let full = format!("{}{}", self.config.base_url().trim_end_matches('/'), path);
        Ok(Url::parse(&full)?)
    }
}
