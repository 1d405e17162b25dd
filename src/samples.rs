// src/samples.rs
//! Last-resort canned paragraphs, one per (sign, source) pair. Loaded once
//! from the embedded corpus and read-only afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::scrape::sources::SourceKind;
use crate::zodiac::ZodiacSign;

static CORPUS: Lazy<HashMap<String, HashMap<String, String>>> = Lazy::new(|| {
    let raw = include_str!("../sample_corpus.json");
    serde_json::from_str(raw).expect("valid sample corpus")
});

pub fn sample_text(sign: ZodiacSign, source: SourceKind) -> Option<&'static str> {
    CORPUS
        .get(sign.slug())
        .and_then(|per_source| per_source.get(source.key()))
        .map(|s| s.as_str())
}
