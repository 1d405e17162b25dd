// src/normalize.rs
//! Pure text cleanup applied to every accepted extraction candidate:
//! entity/tag stripping, stray code points, leftover English sign slugs and
//! date-range fragments, whitespace collapse. No I/O, idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").unwrap());
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// English sign names leak into the Korean text on pages that label blocks
// with both spellings.
static RE_SLUGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(aquarius|pisces|aries|taurus|gemini|cancer|leo|virgo|libra|scorpio|sagittarius|capricorn)\b",
    )
    .unwrap()
});

// Date-range fragments like "3.21~4.19", "(3월 21일 ~ 4월 19일)" or "03/21-04/20".
static RE_DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\s*\d{1,2}\s*[월./]\s*\d{1,2}\s*일?\s*[~\-–]\s*\d{1,2}\s*[월./]\s*\d{1,2}\s*일?\s*\)?")
        .unwrap()
});

/// Marker tokens some sources interleave with the horoscope text.
const MARKER_TOKENS: &[&str] = &["DAY&COLOR", "잘 맞는다고"];

/// Entity-decode and tag-strip to a fixed point. Running to a fixed point
/// keeps `normalize` idempotent even for escaped or nested markup.
pub(crate) fn strip_markup(s: &str) -> String {
    let mut out = s.to_string();
    loop {
        let decoded = html_escape::decode_html_entities(&out).to_string();
        let stripped = RE_TAGS.replace_all(&decoded, " ").to_string();
        if stripped == out {
            return out;
        }
        out = stripped;
    }
}

pub fn normalize(s: &str) -> String {
    let mut out = strip_markup(s);

    out = out
        .replace('\u{00A0}', " ")
        .replace('\u{200B}', "")
        .replace('\u{2022}', " ")
        .replace('\u{2714}', " ")
        .replace('\u{FE0F}', "");

    for tok in MARKER_TOKENS {
        out = out.replace(tok, " ");
    }

    out = RE_SLUGS.replace_all(&out, " ").to_string();
    out = RE_DATE_RANGE.replace_all(&out, " ").to_string();

    out = RE_WS.replace_all(&out, " ").to_string();
    out.trim().to_string()
}
