//! Single-shot call to the generative-language API behind the strategist chat.
//!
//! Each request carries only the current prompt; earlier turns are never
//! resent. There is no retry: any failure comes back as an [`AdviceError`]
//! and the chat turns it into one fixed message.

use gloo_net::http::Request;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for AdviceError {
    fn from(e: gloo_net::Error) -> Self {
        AdviceError::Transport(e.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: config::STRATEGIST_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: config::ADVICE_TEMPERATURE,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined in order.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(content.parts.iter().map(|p| p.text.as_str()).collect())
    }
}

pub fn endpoint(base: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        base.trim_end_matches('/'),
        model,
        urlencoding::encode(api_key)
    )
}

/// `Ok(None)` means the service answered but produced no text.
pub async fn get_financial_advice(prompt: &str) -> Result<Option<String>, AdviceError> {
    let api_key = config::get_api_key().ok_or(AdviceError::MissingApiKey)?;
    let url = endpoint(config::get_advice_api_url(), config::get_advice_model(), api_key);

    debug!("Requesting advice from {}", config::get_advice_model());
    let response = Request::post(&url)
        .json(&GenerateContentRequest::for_prompt(prompt))?
        .send()
        .await?;

    if !response.ok() {
        error!("Advice service returned status {}", response.status());
        return Err(AdviceError::Status(response.status()));
    }

    let body = response
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| AdviceError::Decode(e.to_string()))?;
    Ok(body.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_has_single_user_turn() {
        let body = serde_json::to_value(GenerateContentRequest::for_prompt("Is my runway long enough?"))
            .unwrap();
        assert_eq!(
            body["contents"],
            json!([{ "role": "user", "parts": [{ "text": "Is my runway long enough?" }] }])
        );
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], config::STRATEGIST_INSTRUCTION);
        assert!(body["systemInstruction"].get("role").is_none());
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn text_joins_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Cut " }, { "text": "costs." }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Cut costs."));
    }

    #[test]
    fn empty_response_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn endpoint_encodes_key() {
        assert_eq!(
            endpoint("https://api.example.com/v1beta/", "m", "a b&c"),
            "https://api.example.com/v1beta/models/m:generateContent?key=a%20b%26c"
        );
    }
}
