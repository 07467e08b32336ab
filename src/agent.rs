//! Remote summarisation client.
//!
//! One request to the Gemini generateContent endpoint per run; the response
//! text comes back verbatim. No retries, no streaming.

use crate::config::Config;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Timeout for the generation request; model calls are slow on long documents
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("summarisation request failed: {0}")]
    RequestFailed(String),
    #[error("the model returned no text")]
    EmptyResponse,
    #[error("configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Build the prompt sent to the model: instruction, blank line, document text
pub fn build_prompt(instruction: &str, text: &str) -> String {
    format!("{}\n\n{}", instruction, text)
}

/// Create a configured HTTP client for the generation request
fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Summarise the extracted text with the configured model.
///
/// Remote rejections (oversized payload, bad key) surface unmodified in the
/// error message.
pub async fn summarize(text: &str, instruction: &str, config: &Config) -> Result<String, AgentError> {
    let api_key = config.api_key()?;
    let prompt = build_prompt(instruction, text);

    let client = create_client().map_err(|e| AgentError::RequestFailed(e.to_string()))?;
    let url = format!(
        "{}/{}:generateContent",
        GEMINI_ENDPOINT, config.agent.model
    );

    let body = GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart { text: &prompt }],
        }],
    };

    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| AgentError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        return Err(AgentError::RequestFailed(format!("{}: {}", status, message)));
    }

    let parsed: GenerateResponse = response
        .json()
        .await
        .map_err(|e| AgentError::RequestFailed(e.to_string()))?;

    response_text(parsed).ok_or(AgentError::EmptyResponse)
}

/// Pull the text out of the first candidate, joining its parts
fn response_text(response: GenerateResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_concatenates_with_blank_line() {
        let prompt = build_prompt("Summarise this file in a few sentences:", "The document body.");
        assert_eq!(
            prompt,
            "Summarise this file in a few sentences:\n\nThe document body."
        );
    }

    #[test]
    fn request_matches_wire_format() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn response_text_joins_candidate_parts() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "A short "}, {"text": "summary."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });
        let parsed: GenerateResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response_text(parsed).unwrap(), "A short summary.");
    }

    #[test]
    fn empty_candidates_yield_none() {
        let parsed: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response_text(parsed).is_none());
    }
}
