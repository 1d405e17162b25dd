// src/summary/template.rs
//! Deterministic fallback summaries. Pure templating parameterized by the
//! bundle, sign name, and trait values; no cross-source synthesis, no I/O.

use super::{format_date_ko, SummaryRequest};

const TRUNCATE_AT: usize = 200; // chars, not bytes

fn truncate(text: &str) -> String {
    if text.chars().count() <= TRUNCATE_AT {
        return text.to_string();
    }
    let mut out: String = text.chars().take(TRUNCATE_AT).collect();
    out.push_str("...");
    out
}

/// Plain variant: header, numbered per-source sections, generic closing
/// paragraph.
pub fn render_simple(req: &SummaryRequest) -> String {
    let name = req.sign.name_ko();
    let mut parts = vec![
        format!("📅 {} {} 운세 종합", format_date_ko(req.date), name),
        String::new(),
        "🌟 각 사이트별 운세 정보".to_string(),
        String::new(),
    ];

    let mut n = 0;
    for r in &req.bundle {
        if r.text.trim().is_empty() {
            continue;
        }
        n += 1;
        parts.push(format!("{n}. {}", r.source));
        parts.push(format!("   {}", truncate(r.text.trim())));
        parts.push(String::new());
    }

    parts.push("💡 종합 조언".to_string());
    parts.push(format!(
        "오늘은 {name}에게 새로운 기회와 가능성이 열리는 날입니다. \
         자신감을 가지고 하루를 시작해보세요! ✨"
    ));
    parts.join("\n")
}

/// Richer variant: six labeled subsections driven by the sign's static
/// trait tuple, with the overall section seeded from the first source text
/// when one exists.
pub fn render_detailed(req: &SummaryRequest) -> String {
    let name = req.sign.name_ko();
    let traits = req.sign.traits();

    let overall = req
        .bundle
        .iter()
        .find(|r| !r.text.trim().is_empty())
        .map(|r| truncate(r.text.trim()))
        .unwrap_or_else(|| {
            format!(
                "{} {name}은(는) 특유의 에너지로 무난하고 안정적인 하루를 보낼 수 있습니다.",
                traits.personality
            )
        });

    [
        format!("📅 {} {name} 운세", format_date_ko(req.date)),
        format!("🌟 전체 운세\n{overall}"),
        format!(
            "💕 사랑/인간관계\n{} {name}은(는) 오늘 주변 사람들의 이야기에 귀를 기울이면 관계가 한층 깊어집니다.",
            traits.personality
        ),
        format!(
            "💼 직업/사업\n맡은 일을 차분히 마무리하면 {name}의 꾸준함이 좋은 평가로 이어집니다."
        ),
        "🏃 건강\n가벼운 스트레칭과 충분한 수분 섭취로 컨디션을 지켜주세요.".to_string(),
        format!(
            "🍀 행운의 컬러/아이템\n{} / {}",
            traits.lucky_color, traits.lucky_item
        ),
        format!(
            "💡 오늘의 조언\n{}을(를) 가까이 두고, 서두르기보다 한 걸음씩 나아가 보세요.",
            traits.lucky_item
        ),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::SourceResult;
    use crate::zodiac::ZodiacSign;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn simple_render_is_pure() {
        let req = SummaryRequest {
            bundle: vec![SourceResult {
                source: "엘르 코리아".into(),
                text: "창의적인 에너지가 넘치는 하루입니다.".into(),
            }],
            sign: ZodiacSign::Gemini,
            date: date(),
        };
        assert_eq!(render_simple(&req), render_simple(&req));
        assert_eq!(render_detailed(&req), render_detailed(&req));
    }

    #[test]
    fn simple_render_skips_empty_entries() {
        let req = SummaryRequest {
            bundle: vec![
                SourceResult {
                    source: "SourceA".into(),
                    text: "Today is a bold day for Aries.".into(),
                },
                SourceResult {
                    source: "SourceB".into(),
                    text: String::new(),
                },
                SourceResult {
                    source: "SourceC".into(),
                    text: "Good news in relationships.".into(),
                },
            ],
            sign: ZodiacSign::Aries,
            date: date(),
        };
        let out = render_simple(&req);
        assert!(out.contains("1. SourceA"));
        assert!(out.contains("2. SourceC"));
        assert!(!out.contains("SourceB"));
        assert!(out.contains("💡 종합 조언"));
    }

    #[test]
    fn long_source_text_is_truncated_with_ellipsis() {
        let req = SummaryRequest {
            bundle: vec![SourceResult {
                source: "마리끌레어 코리아".into(),
                text: "가".repeat(450),
            }],
            sign: ZodiacSign::Taurus,
            date: date(),
        };
        let out = render_simple(&req);
        let line = out
            .lines()
            .find(|l| l.trim_start().starts_with('가'))
            .unwrap();
        assert_eq!(line.trim().chars().count(), TRUNCATE_AT + 3);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn detailed_render_survives_an_empty_bundle() {
        let req = SummaryRequest {
            bundle: vec![],
            sign: ZodiacSign::Capricorn,
            date: date(),
        };
        let out = render_detailed(&req);
        assert!(out.contains("🌟 전체 운세"));
        assert!(out.contains("신중하고 성실한"));
        assert!(out.contains("갈색 / 손목시계"));
        assert!(out.contains("💡 오늘의 조언"));
    }

    #[test]
    fn detailed_render_seeds_overall_from_first_source() {
        let req = SummaryRequest {
            bundle: vec![
                SourceResult {
                    source: "마리끌레어 코리아".into(),
                    text: "추진력이 돋보이는 하루입니다.".into(),
                },
                SourceResult {
                    source: "엘르 코리아".into(),
                    text: "활기찬 에너지가 가득합니다.".into(),
                },
            ],
            sign: ZodiacSign::Aries,
            date: date(),
        };
        let out = render_detailed(&req);
        assert!(out.contains("🌟 전체 운세\n추진력이 돋보이는 하루입니다."));
    }
}
