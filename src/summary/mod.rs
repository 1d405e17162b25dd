// src/summary/mod.rs
//! Summary composition: either the generative collaborator or the local
//! deterministic templates. The composer never raises past its boundary;
//! every failure becomes a user-facing message string.

pub mod claude;
pub mod template;

use chrono::{Datelike, NaiveDate};

use crate::scrape::HoroscopeBundle;
use crate::zodiac::ZodiacSign;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    Generative,
    Template,
}

/// Sole input to composition; output depends on nothing else beyond
/// collaborator availability.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub bundle: HoroscopeBundle,
    pub sign: ZodiacSign,
    pub date: NaiveDate,
}

pub fn format_date_ko(date: NaiveDate) -> String {
    format!(
        "{}년 {:02}월 {:02}일",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Per-source blocks in the 【label】 style fed to the prompt.
fn bundle_as_text(bundle: &HoroscopeBundle) -> String {
    bundle
        .iter()
        .filter(|r| !r.text.trim().is_empty())
        .map(|r| format!("【{}】\n{}", r.source, r.text.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Natural-language prompt for the collaborator: formatted date, sign, the
/// labeled source texts, balancing instructions, and the five requested
/// subsections.
pub fn build_prompt(req: &SummaryRequest) -> String {
    format!(
        "다음은 {date} {sign}의 운세 정보입니다. 3개의 다른 사이트에서 가져온 운세 정보를 종합하여 하나의 완성된 운세로 요약해주세요.\n\
         \n\
         {body}\n\
         \n\
         요약 시 다음 사항을 고려해주세요:\n\
         1. 공통적으로 언급되는 내용은 강조해주세요\n\
         2. 서로 다른 관점의 내용은 균형있게 반영해주세요\n\
         3. 전체적인 흐름과 조화를 고려해주세요\n\
         4. 구체적이고 실용적인 조언을 포함해주세요\n\
         5. 긍정적이고 희망적인 톤으로 작성해주세요\n\
         \n\
         다음과 같은 구조로 요약해주세요:\n\
         - 전체 운세 (2-3문장)\n\
         - 사랑/인간관계 (1-2문장)\n\
         - 직업/사업 (1-2문장)\n\
         - 건강/라이프스타일 (1-2문장)\n\
         - 오늘의 조언 (1-2문장)\n\
         \n\
         자연스럽고 읽기 쉬운 한국어로 작성해주세요.",
        date = format_date_ko(req.date),
        sign = req.sign.name_ko(),
        body = bundle_as_text(&req.bundle),
    )
}

/// Compose in the requested mode. Generative mode does NOT substitute the
/// template by itself; that decision belongs to the caller.
pub async fn compose(
    req: &SummaryRequest,
    mode: SummaryMode,
    client: &dyn claude::SummaryClient,
) -> String {
    match mode {
        SummaryMode::Generative => claude::compose_generative(client, req).await,
        SummaryMode::Template => template::render_detailed(req),
    }
}
