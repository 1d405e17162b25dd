// src/scrape/sources.rs
//! The three fixed upstream sources: display labels, candidate URLs, and
//! per-source extraction profiles. Deliberately hard-coded; this is not a
//! general-purpose scraping layer.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    MarieClaire,
    Elle,
    Singles,
}

/// How a source's pages get cut up and accepted.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionProfile {
    /// Tokens that terminate a sign's block on this source, in addition to
    /// the other sign names.
    pub stop_tokens: &'static [&'static str],
    /// Minimum accepted length (bytes, after normalization) for the
    /// structural and anchored passes.
    pub min_len: usize,
    /// Minimum accepted length for the keyword-gated loose pass.
    pub loose_min_len: usize,
    /// Character cap applied to loose captures before normalization.
    pub loose_cap: usize,
}

const MARIE_CLAIRE_PROFILE: ExtractionProfile = ExtractionProfile {
    stop_tokens: &["DAY&COLOR", "잘 맞는다고"],
    min_len: 25,
    loose_min_len: 50,
    loose_cap: 500,
};

const ELLE_PROFILE: ExtractionProfile = ExtractionProfile {
    stop_tokens: &["오늘의 운세", "오늘의"],
    min_len: 25,
    loose_min_len: 50,
    loose_cap: 400,
};

const SINGLES_PROFILE: ExtractionProfile = ExtractionProfile {
    stop_tokens: &["오늘의 운세", "오늘의"],
    min_len: 25,
    loose_min_len: 50,
    loose_cap: 400,
};

impl SourceKind {
    /// Fixed fetch order: Marie Claire, Elle, Singles.
    pub const ALL: [SourceKind; 3] = [SourceKind::MarieClaire, SourceKind::Elle, SourceKind::Singles];

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::MarieClaire => "마리끌레어 코리아",
            SourceKind::Elle => "엘르 코리아",
            SourceKind::Singles => "싱글즈 코리아",
        }
    }

    /// Stable key used in logs and in the sample corpus.
    pub fn key(self) -> &'static str {
        match self {
            SourceKind::MarieClaire => "marie_claire",
            SourceKind::Elle => "elle",
            SourceKind::Singles => "singles",
        }
    }

    /// Candidate URLs, tried in order. Marie Claire templates the monthly
    /// archive URL from the date; the others carry static candidate lists.
    /// The Singles list ends with two alternative fortune sites tried when
    /// the magazine's own endpoints are gone.
    pub fn candidate_urls(self, date: NaiveDate) -> Vec<String> {
        match self {
            SourceKind::MarieClaire => {
                let (year, month) = (date.year(), date.month());
                vec![format!(
                    "https://www.marieclairekorea.com/horoscope/{year}/{month:02}/horoscope{:02}{month:02}/",
                    year % 100
                )]
            }
            SourceKind::Elle => vec![
                "https://www.elle.co.kr/starsigns/today/".to_string(),
                "https://www.elle.co.kr/horoscopes/".to_string(),
                "https://www.elle.co.kr/life/horoscopes/".to_string(),
            ],
            SourceKind::Singles => vec![
                "https://m.singleskorea.com/horoscope".to_string(),
                "https://www.singleskorea.com/horoscope".to_string(),
                "https://singleskorea.com/horoscope".to_string(),
                "https://m.singleskorea.com/fortune".to_string(),
                "https://www.singleskorea.com/fortune".to_string(),
                "https://unse.sportschosun.com/unse/saju/total/form".to_string(),
                "https://www.koreaetour.com/south-koreans-and-the-importance-of-defining-personalities/"
                    .to_string(),
            ],
        }
    }

    pub fn profile(self) -> &'static ExtractionProfile {
        match self {
            SourceKind::MarieClaire => &MARIE_CLAIRE_PROFILE,
            SourceKind::Elle => &ELLE_PROFILE,
            SourceKind::Singles => &SINGLES_PROFILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marie_claire_url_is_date_templated() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let urls = SourceKind::MarieClaire.candidate_urls(date);
        assert_eq!(
            urls,
            vec!["https://www.marieclairekorea.com/horoscope/2025/03/horoscope2503/".to_string()]
        );
    }

    #[test]
    fn static_candidate_lists_keep_their_order() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let elle = SourceKind::Elle.candidate_urls(date);
        assert_eq!(elle.len(), 3);
        assert!(elle[0].contains("starsigns/today"));

        let singles = SourceKind::Singles.candidate_urls(date);
        assert_eq!(singles.len(), 7);
        assert!(singles.last().unwrap().contains("koreaetour"));
    }
}
