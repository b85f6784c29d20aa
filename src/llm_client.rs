use async_trait::async_trait;

use crate::errors::RecommenderError;
use crate::models::request;
use crate::models::response_direct::ChatCompletion;

#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    async fn request_chat_completion(
        &self,
        request: request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, RecommenderError>;
}

/// OpenAI-style `/chat/completions` client.
pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, "/chat/completions")
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    async fn request_chat_completion(
        &self,
        request: request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, RecommenderError> {
        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            log::warn!(
                "chat completion returned status {status}: {}",
                String::from_utf8_lossy(&body)
            );
            // error bodies may still carry an answer field; only unreadable ones fail
            return serde_json::from_slice(&body).map_err(|e| {
                RecommenderError::ApiError(format!(
                    "status {status}, text {}: {e}",
                    String::from_utf8_lossy(&body)
                ))
            });
        }

        let completion: ChatCompletion = serde_json::from_slice(&body)?;

        Ok(completion)
    }
}
