// src/scrape/mod.rs
//! Sequential fetch→extract pipelines over the three fixed sources, with an
//! injectable politeness pause between calls.

pub mod extract;
pub mod fetch;
pub mod sources;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, warn};

use crate::scrape::extract::{extract, Extraction, Provenance};
use crate::scrape::fetch::PageFetcher;
use crate::scrape::sources::SourceKind;
use crate::zodiac::ZodiacSign;

/// One source's contribution to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResult {
    pub source: String,
    pub text: String,
}

/// Per-request collection of non-empty source results, in fixed source
/// order. Length 0..=3.
pub type HoroscopeBundle = Vec<SourceResult>;

/// Pause taken between consecutive source calls. A politeness measure, not a
/// correctness requirement, so it is injectable.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Uniform random pause, 0.5–2 s by default.
pub struct JitterPacer {
    pub min: Duration,
    pub max: Duration,
}

impl Default for JitterPacer {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(500),
            max: Duration::from_millis(2000),
        }
    }
}

#[async_trait]
impl Pacer for JitterPacer {
    async fn pause(&self) {
        let span = self.max.saturating_sub(self.min).as_millis() as u64;
        let jitter = rand::rng().random_range(0..=span);
        tokio::time::sleep(self.min + Duration::from_millis(jitter)).await;
    }
}

/// Zero-delay pacer for tests.
pub struct NoPacer;

#[async_trait]
impl Pacer for NoPacer {
    async fn pause(&self) {}
}

pub struct Aggregator {
    fetcher: Arc<dyn PageFetcher>,
    pacer: Arc<dyn Pacer>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn PageFetcher>, pacer: Arc<dyn Pacer>) -> Self {
        Self { fetcher, pacer }
    }

    /// Run all three pipelines strictly in order, once each, pausing between
    /// them. Always yields exactly three extractions (the extractor is
    /// total), in fixed source order.
    pub async fn collect(&self, date: NaiveDate, sign: ZodiacSign) -> Vec<(SourceKind, Extraction)> {
        let mut results = Vec::with_capacity(SourceKind::ALL.len());
        for (i, source) in SourceKind::ALL.into_iter().enumerate() {
            if i > 0 {
                self.pacer.pause().await;
            }
            let markup = match self.fetcher.fetch(&source.candidate_urls(date)).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(source = source.key(), error = %e, "fetch failed; extracting from nothing");
                    String::new()
                }
            };
            results.push((source, extract(source, &markup, sign)));
        }
        results
    }

    /// Keep the results that carry actual content. Placeholder text is a
    /// user-facing notice, not content, so it stays out of the bundle even
    /// though it is non-empty.
    pub fn into_bundle(results: &[(SourceKind, Extraction)]) -> HoroscopeBundle {
        let mut bundle = HoroscopeBundle::new();
        for (source, ex) in results {
            if ex.provenance == Provenance::Placeholder {
                debug!(source = source.key(), "placeholder result dropped from bundle");
                continue;
            }
            if ex.text.trim().is_empty() {
                continue;
            }
            bundle.push(SourceResult {
                source: source.label().to_string(),
                text: ex.text.clone(),
            });
        }
        bundle
    }

    pub async fn aggregate(&self, date: NaiveDate, sign: ZodiacSign) -> HoroscopeBundle {
        Self::into_bundle(&self.collect(date, sign).await)
    }
}
