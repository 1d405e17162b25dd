// src/scrape/extract.rs
//! Layered per-sign extraction. Upstream pages ship one undifferentiated
//! text blob for all twelve signs, so the core primitive is "cut the
//! candidate at the earliest boundary token" shared by every sign and
//! source, with strategies tried most-structured first:
//!
//! 1. structural pass — heading containing the sign name, then the next
//!    sibling element's text;
//! 2. anchored pattern pass — anchor patterns from most specific (slug +
//!    Korean name) down to the bare name;
//! 3. keyword-gated loose pass — permissive character-run capture, accepted
//!    only when long enough and carrying a fortune-domain keyword;
//! 4. sample-corpus fallback, then a literal "not found" placeholder.
//!
//! `extract` is total: it never errors and never returns empty text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::normalize::{normalize, strip_markup};
use crate::samples;
use crate::scrape::sources::SourceKind;
use crate::zodiac::ZodiacSign;

/// Where an extraction's text came from. Placeholder text is user-facing but
/// logically empty; the aggregator keeps it out of the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Live,
    Sample,
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub text: String,
    pub provenance: Provenance,
}

/// Fortune-domain keywords gating the loose pass.
const LOOSE_KEYWORDS: &[&str] = &[
    "운세", "오늘", "하루", "기회", "주의", "관계", "인생", "기분", "사랑",
];

static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, strong, b, dt").unwrap());

// Permissive run of Korean script plus the punctuation that survives
// normalization; anything else (markup junk, emoji) terminates the capture.
static RE_HANGUL_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[가-힣0-9A-Za-z\s.,!?'"()~%·…-]+"#).unwrap());

pub fn extract(source: SourceKind, markup: &str, sign: ZodiacSign) -> Extraction {
    if !markup.trim().is_empty() {
        let live = structural_pass(source, markup, sign)
            .or_else(|| anchored_pass(source, markup, sign))
            .or_else(|| loose_pass(source, markup, sign));
        if let Some(text) = live {
            return Extraction {
                text,
                provenance: Provenance::Live,
            };
        }
    }

    match samples::sample_text(sign, source) {
        Some(canned) => {
            debug!(source = source.key(), sign = sign.slug(), "using sample corpus fallback");
            Extraction {
                text: canned.to_string(),
                provenance: Provenance::Sample,
            }
        }
        None => Extraction {
            text: format!("{} 운세 정보를 찾을 수 없습니다.", sign.name_ko()),
            provenance: Provenance::Placeholder,
        },
    }
}

/// Slice `text` at the earliest occurrence of any terminating token: another
/// sign's name or one of the source's marker tokens.
fn cut_at_boundary<'a>(source: SourceKind, text: &'a str, sign: ZodiacSign) -> &'a str {
    let mut end = text.len();
    for tok in sign.other_boundary_tokens() {
        if let Some(i) = text.find(tok) {
            end = end.min(i);
        }
    }
    for tok in source.profile().stop_tokens {
        if let Some(i) = text.find(tok) {
            end = end.min(i);
        }
    }
    &text[..end]
}

/// Pass 1: DOM-aware. A heading-like element whose text carries the sign
/// name, followed by a sibling element holding the horoscope body.
fn structural_pass(source: SourceKind, markup: &str, sign: ZodiacSign) -> Option<String> {
    let doc = Html::parse_document(markup);
    let name = sign.name_ko();
    for el in doc.select(&HEADING_SELECTOR) {
        let heading: String = el.text().collect();
        if !heading.contains(name) {
            continue;
        }
        let Some(body) = el.next_siblings().filter_map(ElementRef::wrap).next() else {
            continue;
        };
        let raw: String = body.text().collect::<Vec<_>>().join(" ");
        let cleaned = normalize(cut_at_boundary(source, &raw, sign));
        if cleaned.len() >= source.profile().min_len {
            debug!(source = source.key(), sign = sign.slug(), "structural pass matched");
            return Some(cleaned);
        }
    }
    None
}

/// Pass 2: anchored free-text patterns on the tag-stripped document, most
/// specific first. Content starts where the anchor ends and runs to the
/// nearest boundary token.
fn anchored_pass(source: SourceKind, markup: &str, sign: ZodiacSign) -> Option<String> {
    let flat = strip_markup(markup);
    let name = regex::escape(sign.name_ko());
    let slug = sign.slug();
    let patterns = [
        format!(r"(?i){slug}\s*{name}"),
        format!(r"{name}\s*\([^)]*\)"),
        name.clone(),
    ];
    for pattern in &patterns {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        let Some(m) = re.find(&flat) else {
            continue;
        };
        let cleaned = normalize(cut_at_boundary(source, &flat[m.end()..], sign));
        if cleaned.len() >= source.profile().min_len {
            debug!(source = source.key(), sign = sign.slug(), pattern = %pattern, "anchored pass matched");
            return Some(cleaned);
        }
    }
    None
}

/// Pass 3: maximally permissive. Examines every occurrence of the sign name
/// (the first one is often a navigation entry) and keeps the first
/// long-enough character run that mentions the fortune domain at all.
fn loose_pass(source: SourceKind, markup: &str, sign: ZodiacSign) -> Option<String> {
    let flat = strip_markup(markup);
    let name = sign.name_ko();
    let profile = source.profile();

    let mut from = 0usize;
    while let Some(i) = flat[from..].find(name) {
        let start = from + i + name.len();
        from = start;

        let rest = cut_at_boundary(source, &flat[start..], sign);
        if let Some(run) = RE_HANGUL_RUN.find(rest) {
            if run.start() == 0 {
                let capped: String = run.as_str().chars().take(profile.loose_cap).collect();
                let cleaned = normalize(&capped);
                if cleaned.len() >= profile.loose_min_len
                    && LOOSE_KEYWORDS.iter().any(|k| cleaned.contains(k))
                {
                    debug!(source = source.key(), sign = sign.slug(), "loose pass matched");
                    return Some(cleaned);
                }
            }
        }
    }
    None
}
