// src/lib.rs
// Public library surface for the boundary binary and integration tests.

pub mod normalize;
pub mod samples;
pub mod scrape;
pub mod summary;
pub mod zodiac;

// ---- Re-exports for stable public API ----
pub use crate::scrape::{Aggregator, HoroscopeBundle, JitterPacer, NoPacer, SourceResult};
pub use crate::summary::{SummaryMode, SummaryRequest};
pub use crate::zodiac::ZodiacSign;
