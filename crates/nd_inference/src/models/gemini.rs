use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use nd_core::{Error, Result};

use super::GenerativeModel;
use crate::Config;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const MAX_RETRIES: u32 = 3;

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

pub struct GeminiModel {
    client: Arc<Client>,
    api_key: String,
    model: String,
    base_url: String,
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiModel {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Inference("Gemini API key is required".to_string()))?;

        let base_url = match &config.model_url {
            Some(raw) => {
                let url = Url::parse(raw).map_err(|_| Error::InvalidUrl(raw.clone()))?;
                url.as_str().trim_end_matches('/').to_string()
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        // "gemini" is the backend selector; a concrete variant name in the
        // config overrides the default.
        let model = match config.model_name.as_deref() {
            Some(name) if name.starts_with("gemini-") => name.to_string(),
            _ => DEFAULT_MODEL.to_string(),
        };

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            model,
            base_url,
        })
    }

    async fn request(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| Error::External(anyhow!("Gemini returned no candidates")))?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();

        Ok(text)
    }
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let mut retries = 0;
        let mut last_error = None;

        while retries < MAX_RETRIES {
            match self.request(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    last_error = Some(e);
                    retries += 1;
                    if retries < MAX_RETRIES {
                        let backoff = Duration::from_secs(1 << retries);
                        warn!(
                            "Gemini request failed, retrying {}/{} in {}s...",
                            retries,
                            MAX_RETRIES,
                            backoff.as_secs()
                        );
                        tokio::time::sleep(backoff).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            Error::Inference("Gemini request failed after all retries".to_string())
        }))
    }
}
