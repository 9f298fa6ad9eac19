//! Connectivity diagnostics
//!
//! Opaque probe used by operators to check reachability of the catalog
//! service. Never fails; every problem becomes an entry in the log.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::{CatalogTransport, NetworkCatalogClient};

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// One step of a diagnostics run
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticEntry {
    pub step: &'static str,
    pub ok: bool,
    pub detail: String,
    pub elapsed_ms: u64,
}

impl NetworkCatalogClient {
    /// Run the connectivity probe and return its log in execution order
    pub async fn diagnose(&self) -> Vec<DiagnosticEntry> {
        let mut log = Vec::with_capacity(2);

        let started = Instant::now();
        let health = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;
        log.push(match health {
            Ok(resp) => DiagnosticEntry {
                step: "health",
                ok: resp.status().is_success(),
                detail: format!("status {}", resp.status()),
                elapsed_ms: elapsed_ms(started),
            },
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                DiagnosticEntry {
                    step: "health",
                    ok: false,
                    detail: e.to_string(),
                    elapsed_ms: elapsed_ms(started),
                }
            }
        });

        let started = Instant::now();
        log.push(match self.list().await {
            Ok(listings) => DiagnosticEntry {
                step: "list",
                ok: true,
                detail: format!("{} listings from {}", listings.len(), self.collection_url()),
                elapsed_ms: elapsed_ms(started),
            },
            Err(e) => DiagnosticEntry {
                step: "list",
                ok: false,
                detail: e.to_string(),
                elapsed_ms: elapsed_ms(started),
            },
        });

        log
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
