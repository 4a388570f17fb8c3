use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// One surface token with the reading the segmenter reported (katakana),
/// when it reported one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphToken {
    pub surface: String,
    pub reading: Option<String>,
}

/// Seam to the morphological segmentation collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MorphTokenizer: Send + Sync {
    async fn tokenize(&self, text: &str) -> AppResult<Vec<MorphToken>>;
}

const MA_SERVICE_ENDPOINT: &str = "https://jlp.yahooapis.jp/MAService/V2/parse";

/// Client for the Yahoo! JLP MAService JSON-RPC API.
pub struct YahooMaTokenizer {
    http: reqwest::Client,
    client_id: String,
}

impl YahooMaTokenizer {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: client_id.into(),
        }
    }
}

#[derive(Serialize)]
struct MaRequest<'a> {
    id: &'a str,
    jsonrpc: &'a str,
    method: &'a str,
    params: MaParams<'a>,
}

#[derive(Serialize)]
struct MaParams<'a> {
    q: &'a str,
}

#[derive(Deserialize)]
struct MaResponse {
    error: Option<MaError>,
    result: Option<MaResult>,
}

#[derive(Deserialize)]
struct MaError {
    message: String,
}

#[derive(Deserialize)]
struct MaResult {
    /// Rows of `[surface, reading, baseform, pos, ...]`.
    #[serde(default)]
    tokens: Vec<Vec<String>>,
}

#[async_trait]
impl MorphTokenizer for YahooMaTokenizer {
    async fn tokenize(&self, text: &str) -> AppResult<Vec<MorphToken>> {
        let body = MaRequest {
            id: "ruby-api",
            jsonrpc: "2.0",
            method: "jlp.maservice.parse",
            params: MaParams { q: text },
        };

        let response = self
            .http
            .post(MA_SERVICE_ENDPOINT)
            .header("User-Agent", format!("Yahoo AppID: {}", self.client_id))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::TokenizerUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::TokenizerUnavailable(e.to_string()))?;

        let parsed: MaResponse = response
            .json()
            .await
            .map_err(|e| AppError::TokenizerUnavailable(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(AppError::TokenizerUnavailable(error.message));
        }

        let rows = parsed.result.map(|r| r.tokens).unwrap_or_default();
        Ok(rows.into_iter().map(row_to_token).collect())
    }
}

fn row_to_token(row: Vec<String>) -> MorphToken {
    let mut fields = row.into_iter();
    let surface = fields.next().unwrap_or_default();
    let reading = fields.next().filter(|r| !r.is_empty());
    MorphToken { surface, reading }
}
