//! Horoscope Aggregator — Binary Entrypoint
//! Stands in for the interactive front end: fetches the three source panels
//! for one (date, sign) pair and prints the synthesized summary, preferring
//! the generative collaborator when a credential is configured.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

use horoscope_aggregator::scrape::fetch::HttpFetcher;
use horoscope_aggregator::summary::claude::{self, ClaudeClient, SummaryClient};
use horoscope_aggregator::summary::{self, template};
use horoscope_aggregator::{Aggregator, JitterPacer, SummaryRequest, ZodiacSign};

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op when absent.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("horoscope_aggregator=info,warn")),
        )
        .compact()
        .init();

    // Outermost handler: anything unexpected degrades to a message, never a
    // crash.
    if let Err(e) = run().await {
        tracing::error!(error = ?e, "request failed");
        println!("운세 정보를 처리하는 중 오류가 발생했습니다.");
    }
}

async fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let sign: ZodiacSign = match args.next() {
        Some(s) => s.parse()?,
        None => bail!("usage: horoscope-aggregator <sign> [YYYY-MM-DD]"),
    };
    let date = match args.next() {
        Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .with_context(|| format!("date must be YYYY-MM-DD, got {d}"))?,
        None => Local::now().date_naive(),
    };

    let fetcher = Arc::new(HttpFetcher::new()?);
    let aggregator = Aggregator::new(fetcher, Arc::new(JitterPacer::default()));
    let results = aggregator.collect(date, sign).await;

    println!(
        "📅 {} — {} 운세\n",
        summary::format_date_ko(date),
        sign.name_ko()
    );
    for (source, extraction) in &results {
        println!("== {} ==", source.label());
        println!("{}\n", extraction.text);
    }

    let request = SummaryRequest {
        bundle: Aggregator::into_bundle(&results),
        sign,
        date,
    };

    let client = ClaudeClient::from_env();
    let summary_text = if client.is_configured() && !request.bundle.is_empty() {
        let answer = claude::compose_generative(&client, &request).await;
        if answer == claude::MSG_NOT_CONFIGURED || answer == claude::MSG_CALL_FAILED {
            // Caller-side substitution: the composer never switches modes on
            // its own.
            template::render_detailed(&request)
        } else {
            answer
        }
    } else {
        template::render_detailed(&request)
    };

    println!("== 종합 요약 ==\n{summary_text}");
    Ok(())
}
