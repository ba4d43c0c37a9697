//! Concurrent provider fan-out.
//!
//! The aggregator launches every configured adapter at once and waits for
//! all of them to settle. A provider that errors, times out, or panics
//! leaves its bundle slot empty; it can never fail or delay the others.

use crate::providers::ProviderAdapter;
use crate::types::{AppError, Result, SourceBundle};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Fans one topic out to all providers and collects a [`SourceBundle`].
pub struct Aggregator {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
    timeout: Duration,
}

impl Aggregator {
    /// Build an aggregator over a fixed set of adapters. Constructing one
    /// with no adapters at all is a fatal configuration error, distinct
    /// from the normal empty-result outcome.
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>, timeout: Duration) -> Result<Self> {
        if adapters.is_empty() {
            return Err(AppError::Config(
                "aggregator requires at least one provider adapter".to_string(),
            ));
        }
        Ok(Self { adapters, timeout })
    }

    /// Query every configured provider concurrently, single attempt each.
    ///
    /// Uses all-settled join semantics: every task runs to completion (or
    /// its timeout) before the bundle is returned. Slots are assembled by
    /// category, so completion order never affects the bundle.
    pub async fn aggregate(&self, topic: &str) -> SourceBundle {
        let mut set = JoinSet::new();

        for adapter in &self.adapters {
            if !adapter.is_configured() {
                tracing::debug!(provider = adapter.name(), "skipping unconfigured provider");
                continue;
            }

            let adapter = Arc::clone(adapter);
            let topic = topic.to_string();
            let timeout = self.timeout;

            set.spawn(async move {
                let category = adapter.category();
                let items = match tokio::time::timeout(timeout, adapter.fetch(&topic)).await {
                    Ok(Ok(items)) => {
                        tracing::debug!(
                            provider = adapter.name(),
                            count = items.len(),
                            "provider completed"
                        );
                        items
                    }
                    Ok(Err(e)) => {
                        tracing::warn!(provider = adapter.name(), error = %e, "provider failed");
                        Vec::new()
                    }
                    Err(_) => {
                        tracing::warn!(
                            provider = adapter.name(),
                            timeout_ms = timeout.as_millis() as u64,
                            "provider timed out"
                        );
                        Vec::new()
                    }
                };
                (category, items)
            });
        }

        let mut bundle = SourceBundle::new();
        while let Some(joined) = set.join_next().await {
            // A panicked provider task leaves its slot absent.
            if let Ok((category, items)) = joined {
                bundle.insert(category, items);
            }
        }
        bundle
    }
}
