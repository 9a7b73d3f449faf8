#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Completion;
use crate::domain::models::CompletionClient;
use crate::domain::models::Request;
use crate::domain::models::SessionError;

const OFFICIAL_URL: &str = "https://api.openai.com";
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_millis(1000);

fn convert_err(err: reqwest::Error, timeout: Option<Duration>) -> SessionError {
    if err.is_timeout() {
        return SessionError::Timeout(timeout.unwrap_or_default());
    }
    if err.is_decode() {
        return SessionError::MalformedResponse(err.to_string());
    }

    return SessionError::ServiceUnavailable(err.to_string());
}

fn convert_status(status: u16, body: String) -> SessionError {
    let detail = format!("status {status}: {body}");
    match status {
        401 | 403 => return SessionError::AuthenticationError(detail),
        429 => return SessionError::RateLimited(detail),
        500..=599 => return SessionError::ServiceUnavailable(detail),
        _ => return SessionError::MalformedResponse(detail),
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MessageRequest {
    role: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    temperature: f32,
    messages: Vec<MessageRequest>,
    stream: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionChoiceResponse {
    message: MessageRequest,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct UsageResponse {
    total_tokens: u64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoiceResponse>,
    usage: Option<UsageResponse>,
}

pub struct OpenAI {
    client: reqwest::Client,
    url: String,
    token: String,
    model: String,
    temperature: f32,
    timeout: Option<Duration>,
}

impl Default for OpenAI {
    fn default() -> OpenAI {
        return OpenAI::new(
            Config::get(ConfigKey::OpenAiURL),
            Config::get(ConfigKey::OpenAiToken),
            Config::get(ConfigKey::Model),
            Config::get(ConfigKey::Temperature)
                .parse::<f32>()
                .unwrap_or_default(),
        )
        .with_timeout(Config::timeout());
    }
}

impl OpenAI {
    pub fn new(url: String, token: String, model: String, temperature: f32) -> OpenAI {
        return OpenAI {
            client: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
            token,
            model,
            temperature,
            timeout: None,
        };
    }

    /// Bounds each completion request, including reading the body.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> OpenAI {
        self.timeout = timeout;
        return self;
    }
}

#[async_trait]
impl CompletionClient for OpenAI {
    fn name(&self) -> &'static str {
        return "openai";
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("OpenAI URL is not defined");
        }
        if self.token.is_empty() {
            bail!("OpenAI token is not defined. Set OPENAI_API_KEY or pass --openai-token");
        }

        // The official API has no index route worth probing.
        if self.url == OFFICIAL_URL {
            return Ok(());
        }

        let res = self
            .client
            .get(&self.url)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await;

        let status = match res {
            Ok(res) => res.status().as_u16(),
            Err(err) => {
                tracing::error!(error = ?err, "OpenAI is not reachable");
                bail!("OpenAI is not reachable at {}", self.url);
            }
        };
        if status >= 400 {
            tracing::error!(status = status, "OpenAI health check failed");
            bail!("OpenAI health check failed with status {status}");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn complete(&self, request: &Request) -> Result<Completion, SessionError> {
        let req = CompletionRequest {
            model: self.model.to_string(),
            temperature: self.temperature,
            messages: request
                .messages()
                .iter()
                .map(|message| {
                    return MessageRequest {
                        role: message.role.to_string(),
                        content: message.content.to_string(),
                    };
                })
                .collect(),
            stream: false,
        };

        let mut builder = self
            .client
            .post(format!("{url}/v1/chat/completions", url = self.url))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&req);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let res = builder
            .send()
            .await
            .map_err(|err| return convert_err(err, self.timeout))?;

        let status = res.status().as_u16();
        if !res.status().is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(status = status, "Failed to make completion request to OpenAI");
            return Err(convert_status(status, body));
        }

        let body = res
            .text()
            .await
            .map_err(|err| return convert_err(err, self.timeout))?;
        let ores: CompletionResponse = serde_json::from_str(&body)
            .map_err(|err| return SessionError::MalformedResponse(err.to_string()))?;
        tracing::debug!(body = ?ores, "Completion response");

        let tokens_used = ores.usage.map(|usage| return usage.total_tokens).unwrap_or(0);
        let text = match ores.choices.into_iter().next() {
            Some(choice) => choice.message.content,
            None => {
                return Err(SessionError::MalformedResponse(
                    "response has no choices".to_string(),
                ));
            }
        };

        if text.trim().is_empty() {
            return Err(SessionError::MalformedResponse(
                "response content is empty".to_string(),
            ));
        }

        return Ok(Completion { text, tokens_used });
    }

    fn reset_state(&mut self) {
        // Fresh connection pool for the new interview.
        self.client = reqwest::Client::new();
        tracing::debug!("OpenAI client recreated");
    }
}
