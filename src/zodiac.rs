// src/zodiac.rs
//! The twelve signs: Korean display names, English slugs, the boundary-token
//! set used to split all-signs-in-one-blob pages, and the static trait table
//! consumed by the detailed template.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Every token that can open a sign block somewhere upstream. Sagittarius
/// appears under two spellings in the wild, so the set has thirteen entries.
pub const BOUNDARY_TOKENS: [&str; 13] = [
    "양자리",
    "황소자리",
    "쌍둥이자리",
    "게자리",
    "사자자리",
    "처녀자리",
    "천칭자리",
    "전갈자리",
    "궁수자리",
    "사수자리",
    "염소자리",
    "물병자리",
    "물고기자리",
];

/// Static attributes used only by the fallback composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignTraits {
    pub personality: &'static str,
    pub lucky_color: &'static str,
    pub lucky_item: &'static str,
}

impl ZodiacSign {
    pub fn name_ko(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "양자리",
            ZodiacSign::Taurus => "황소자리",
            ZodiacSign::Gemini => "쌍둥이자리",
            ZodiacSign::Cancer => "게자리",
            ZodiacSign::Leo => "사자자리",
            ZodiacSign::Virgo => "처녀자리",
            ZodiacSign::Libra => "천칭자리",
            ZodiacSign::Scorpio => "전갈자리",
            ZodiacSign::Sagittarius => "궁수자리",
            ZodiacSign::Capricorn => "염소자리",
            ZodiacSign::Aquarius => "물병자리",
            ZodiacSign::Pisces => "물고기자리",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    /// All spellings that mean this sign in upstream text.
    fn own_tokens(self) -> &'static [&'static str] {
        match self {
            ZodiacSign::Sagittarius => &["궁수자리", "사수자리"],
            ZodiacSign::Aries => &["양자리"],
            ZodiacSign::Taurus => &["황소자리"],
            ZodiacSign::Gemini => &["쌍둥이자리"],
            ZodiacSign::Cancer => &["게자리"],
            ZodiacSign::Leo => &["사자자리"],
            ZodiacSign::Virgo => &["처녀자리"],
            ZodiacSign::Libra => &["천칭자리"],
            ZodiacSign::Scorpio => &["전갈자리"],
            ZodiacSign::Capricorn => &["염소자리"],
            ZodiacSign::Aquarius => &["물병자리"],
            ZodiacSign::Pisces => &["물고기자리"],
        }
    }

    /// Boundary tokens that terminate THIS sign's block: every known opener
    /// except the sign's own spellings.
    pub fn other_boundary_tokens(self) -> impl Iterator<Item = &'static str> {
        let own = self.own_tokens();
        BOUNDARY_TOKENS.into_iter().filter(move |t| !own.contains(t))
    }

    /// Total by construction; the table covers all twelve signs.
    pub fn traits(self) -> SignTraits {
        match self {
            ZodiacSign::Aries => SignTraits {
                personality: "열정적이고 도전적인",
                lucky_color: "빨간색",
                lucky_item: "운동화",
            },
            ZodiacSign::Taurus => SignTraits {
                personality: "끈기 있고 현실적인",
                lucky_color: "초록색",
                lucky_item: "머그컵",
            },
            ZodiacSign::Gemini => SignTraits {
                personality: "호기심 많고 재치 있는",
                lucky_color: "노란색",
                lucky_item: "수첩",
            },
            ZodiacSign::Cancer => SignTraits {
                personality: "섬세하고 다정한",
                lucky_color: "은색",
                lucky_item: "손수건",
            },
            ZodiacSign::Leo => SignTraits {
                personality: "당당하고 자신감 넘치는",
                lucky_color: "금색",
                lucky_item: "선글라스",
            },
            ZodiacSign::Virgo => SignTraits {
                personality: "꼼꼼하고 분석적인",
                lucky_color: "베이지색",
                lucky_item: "만년필",
            },
            ZodiacSign::Libra => SignTraits {
                personality: "균형 잡히고 사교적인",
                lucky_color: "하늘색",
                lucky_item: "향수",
            },
            ZodiacSign::Scorpio => SignTraits {
                personality: "집중력 있고 신비로운",
                lucky_color: "자주색",
                lucky_item: "열쇠고리",
            },
            ZodiacSign::Sagittarius => SignTraits {
                personality: "자유롭고 낙천적인",
                lucky_color: "보라색",
                lucky_item: "여행 가방",
            },
            ZodiacSign::Capricorn => SignTraits {
                personality: "신중하고 성실한",
                lucky_color: "갈색",
                lucky_item: "손목시계",
            },
            ZodiacSign::Aquarius => SignTraits {
                personality: "독창적이고 미래지향적인",
                lucky_color: "파란색",
                lucky_item: "이어폰",
            },
            ZodiacSign::Pisces => SignTraits {
                personality: "감성적이고 상상력이 풍부한",
                lucky_color: "청록색",
                lucky_item: "일기장",
            },
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_ko())
    }
}

impl FromStr for ZodiacSign {
    type Err = anyhow::Error;

    /// Accepts the Korean display name (either Sagittarius spelling) or the
    /// English slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let lowered = needle.to_ascii_lowercase();
        for sign in ALL_SIGNS {
            if sign.own_tokens().contains(&needle) || sign.slug() == lowered {
                return Ok(sign);
            }
        }
        anyhow::bail!("unknown zodiac sign: {needle}")
    }
}
