// src/summary/claude.rs
//! Anthropic messages-API client, plus the sentinel strings the composer
//! degrades to when the collaborator is absent or failing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use super::{build_prompt, SummaryRequest};

pub const API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const API_KEY_ENV: &str = "CLAUDE_API_KEY";

const CALL_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_TOKENS: u32 = 1000;

/// Fixed user-facing sentinels. The boundary layer compares against these to
/// decide whether to substitute template mode.
pub const MSG_NOT_CONFIGURED: &str =
    "Claude API 키가 설정되지 않았습니다. .env 파일을 확인해주세요.";
pub const MSG_CALL_FAILED: &str = "요약을 생성할 수 없습니다. API 호출에 실패했습니다.";
pub const MSG_EMPTY_BUNDLE: &str = "요약할 운세 정보가 없습니다.";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("collaborator credential is not configured")]
    Unconfigured,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected http status {0}")]
    BadStatus(u16),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

#[async_trait]
pub trait SummaryClient: Send + Sync {
    fn is_configured(&self) -> bool;
    async fn complete(&self, prompt: &str) -> Result<String, SummaryError>;
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

pub struct ClaudeClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl ClaudeClient {
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, API_URL)
    }

    /// Endpoint override for tests against a local HTTP double.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()
            .expect("reqwest client");
        Self {
            http,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: endpoint.into(),
        }
    }

    /// One-off connectivity probe. Logs the outcome and never fails the
    /// caller.
    pub async fn quick_probe(&self) {
        if !self.is_configured() {
            info!("claude probe skipped: no credential");
            return;
        }
        match self.complete("안녕하세요. 연결 테스트입니다.").await {
            Ok(_) => info!("claude probe ok"),
            Err(e) => warn!(error = %e, "claude probe failed"),
        }
    }
}

#[async_trait]
impl SummaryClient for ClaudeClient {
    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn complete(&self, prompt: &str) -> Result<String, SummaryError> {
        if !self.is_configured() {
            return Err(SummaryError::Unconfigured);
        }
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };
        let resp = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummaryError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SummaryError::BadStatus(status.as_u16()));
        }
        let body: MessagesResponse = resp
            .json()
            .await
            .map_err(|e| SummaryError::MalformedBody(e.to_string()))?;
        let text = body
            .content
            .first()
            .map(|block| block.text.trim().to_string())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(SummaryError::MalformedBody("empty content".to_string()));
        }
        Ok(text)
    }
}

/// Never configured, never does I/O. Used for keyless runs and tests.
pub struct UnconfiguredClient;

#[async_trait]
impl SummaryClient for UnconfiguredClient {
    fn is_configured(&self) -> bool {
        false
    }

    async fn complete(&self, _prompt: &str) -> Result<String, SummaryError> {
        Err(SummaryError::Unconfigured)
    }
}

/// Generative composition. Absorbs every failure into a sentinel string and
/// deliberately does NOT fall back to template mode; the caller decides.
pub async fn compose_generative(client: &dyn SummaryClient, req: &SummaryRequest) -> String {
    if !client.is_configured() {
        return MSG_NOT_CONFIGURED.to_string();
    }
    if req.bundle.iter().all(|r| r.text.trim().is_empty()) {
        return MSG_EMPTY_BUNDLE.to_string();
    }
    let prompt = build_prompt(req);
    match client.complete(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!(error = %e, "summary call failed");
            MSG_CALL_FAILED.to_string()
        }
    }
}
