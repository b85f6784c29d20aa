use std::sync::Arc;

use crate::config::LlmConfig;
use crate::consts;
use crate::errors::RecommenderError;
use crate::llm_client::LLMClientTrait;
use crate::models::request::{ChatCompletionCreate, Message};

/// Asks the local model when the corpus has nothing close enough.
///
/// Never fails: downstream problems come back as an error sentence, since
/// callers always get a 200 with a text body.
pub struct FallbackResponder {
    client: Arc<dyn LLMClientTrait>,
    model: String,
    system_prompt: String,
    temperature: f64,
    max_tokens: i32,
}

impl FallbackResponder {
    pub fn new(client: Arc<dyn LLMClientTrait>, llm_config: &LlmConfig) -> Self {
        Self {
            client,
            model: llm_config.model.clone(),
            system_prompt: llm_config.system_prompt.clone(),
            temperature: llm_config.temperature,
            max_tokens: llm_config.max_tokens,
        }
    }

    pub fn build_request(&self, user_input: &str) -> ChatCompletionCreate {
        ChatCompletionCreate {
            model: self.model.clone(),
            messages: vec![
                Message::system(&self.system_prompt),
                Message::user(user_input),
            ],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
            stream: Some(false),
        }
    }

    /// Generated answer, or the placeholder when the reply carries none.
    pub async fn try_respond(&self, user_input: &str) -> Result<String, RecommenderError> {
        let completion = self
            .client
            .request_chat_completion(self.build_request(user_input))
            .await?;

        match completion.answer() {
            Some(answer) => Ok(answer.to_string()),
            None => {
                log::warn!("completion carried no answer text: {:?}", completion);
                Ok(consts::NO_ANSWER_PLACEHOLDER.to_string())
            }
        }
    }

    pub async fn respond(&self, user_input: &str) -> String {
        match self.try_respond(user_input).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("fallback completion error: {:?}", e);
                error_text(&e)
            }
        }
    }
}

pub fn error_text(error: &RecommenderError) -> String {
    format!("{}: {}", consts::FALLBACK_ERROR_PREFIX, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::helpers::StubLLMClient;
    use serde_json::json;

    fn responder(stub: Arc<StubLLMClient>) -> FallbackResponder {
        FallbackResponder::new(stub, &LlmConfig::default())
    }

    #[test]
    fn test_build_request_shape() {
        let stub = Arc::new(StubLLMClient::new());
        let request = responder(stub).build_request("¿Qué me recomiendas?");

        assert_eq!(request.model, "llama-3.2-3b-instruct");
        assert_eq!(
            request.messages,
            vec![
                Message::system("You are a helpful assistant."),
                Message::user("¿Qué me recomiendas?"),
            ]
        );
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(50));
        assert_eq!(request.stream, Some(false));
    }

    #[tokio::test]
    async fn test_respond_returns_generated_answer() {
        let stub = Arc::new(StubLLMClient::new());
        stub.push_completion(json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Una bicicleta."}}]
        }));

        let text = responder(stub.clone()).respond("algo para hacer deporte").await;

        assert_eq!(text, "Una bicicleta.");
        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].messages[1].content, "algo para hacer deporte");
    }

    #[tokio::test]
    async fn test_respond_placeholder_when_answer_missing() {
        let stub = Arc::new(StubLLMClient::new());
        stub.push_completion(json!({"choices": []}));

        let text = responder(stub).respond("hola").await;
        assert_eq!(text, consts::NO_ANSWER_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_respond_turns_errors_into_text() {
        let stub = Arc::new(StubLLMClient::new());
        stub.push_error(RecommenderError::NetworkError("connection refused".to_string()));

        let text = responder(stub).respond("hola").await;
        assert_eq!(
            text,
            "Error al conectar con el modelo local: Network error: connection refused"
        );
    }

    #[tokio::test]
    async fn test_try_respond_propagates_errors() {
        let stub = Arc::new(StubLLMClient::new());
        stub.push_error(RecommenderError::ApiError("status 500".to_string()));

        let err = responder(stub).try_respond("hola").await.unwrap_err();
        assert!(matches!(err, RecommenderError::ApiError(_)));
    }
}
