//! HTTP client for the hosted vision-verification endpoint.
//!
//! Speaks the `generateContent` REST shape: the proof image travels as raw
//! base64 (no data-URI prefix) alongside the instruction text, and the
//! response is constrained to the verdict schema via a structured-output
//! request. The model's JSON answer is parsed out of the first candidate.

use crate::error::GatewayError;
use crate::prompt;
use crate::verdict::Verdict;
use crate::verifier::ProofVerifier;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use karo_types::{Platform, ProofKind};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Default request timeout. Expiry is a verification failure, not a crash.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default hosted model identifier.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Connection settings for the vision endpoint.
#[derive(Clone, Debug)]
pub struct VisionGatewayConfig {
    /// Base URL of the inference API.
    pub base_url: String,
    /// Model identifier appended to the generateContent path.
    pub model: String,
    /// API key sent via the `x-goog-api-key` header.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl VisionGatewayConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The production [`ProofVerifier`]: one request/response call per proof.
pub struct VisionGateway {
    config: VisionGatewayConfig,
    client: reqwest::Client,
}

impl VisionGateway {
    pub fn new(config: VisionGatewayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
        )
    }

    async fn request_verdict(
        &self,
        image: &[u8],
        kind: ProofKind,
        product_name: &str,
        platform: Platform,
    ) -> Result<Verdict, GatewayError> {
        let instruction = prompt::build_instruction(kind, product_name, platform);
        let body = build_request_body(image, &instruction);

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(GatewayError::Status(resp.status().as_u16()));
        }

        let body: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        parse_verdict(&body)
    }
}

impl ProofVerifier for VisionGateway {
    fn verify(
        &self,
        image: &[u8],
        kind: ProofKind,
        product_name: &str,
        platform: Platform,
    ) -> impl Future<Output = Verdict> + Send {
        async move {
            match self
                .request_verdict(image, kind, product_name, platform)
                .await
            {
                Ok(verdict) => verdict,
                Err(e) => {
                    tracing::warn!(%kind, error = %e, "verification call failed, failing closed");
                    Verdict::unavailable()
                }
            }
        }
    }
}

// ── Wire types ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    /// Raw base64 of the image bytes — no data-URI prefix.
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

fn build_request_body(image: &[u8], instruction: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    inline_data: Some(InlineData {
                        mime_type: "image/jpeg".to_string(),
                        data: BASE64.encode(image),
                    }),
                    text: None,
                },
                Part {
                    inline_data: None,
                    text: Some(instruction.to_string()),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: serde_json::json!({
                "type": "OBJECT",
                "properties": {
                    "valid": { "type": "BOOLEAN" },
                    "reason": { "type": "STRING" },
                    "detectedText": {
                        "type": "STRING",
                        "description": "A brief summary of what text was actually found.",
                    },
                },
                "required": ["valid", "reason"],
            }),
        },
    }
}

/// Extract the verdict JSON from the first candidate's first text part.
fn parse_verdict(response: &GenerateContentResponse) -> Result<Verdict, GatewayError> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.iter().find_map(|p| p.text.as_deref()))
        .ok_or_else(|| GatewayError::MalformedResponse("no text candidate".into()))?;

    serde_json::from_str(text).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}
