use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::corpus::{Corpus, TrainingExample};
use crate::errors::RecommenderError;
use crate::llm_client::LLMClientTrait;
use crate::models::request;
use crate::models::response_direct::ChatCompletion;

/// Replays queued replies and records every request it receives.
pub struct StubLLMClient {
    responses: Mutex<VecDeque<Result<ChatCompletion, RecommenderError>>>,
    calls: Mutex<Vec<request::ChatCompletionCreate>>,
}

impl StubLLMClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_completion(&self, body: Value) {
        let completion: ChatCompletion =
            serde_json::from_value(body).expect("stub completion should parse");
        self.responses.lock().unwrap().push_back(Ok(completion));
    }

    pub fn push_error(&self, error: RecommenderError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<request::ChatCompletionCreate> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClientTrait for StubLLMClient {
    async fn request_chat_completion(
        &self,
        request: request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, RecommenderError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RecommenderError::NetworkError("no stubbed reply".to_string())))
    }
}

pub fn create_test_corpus() -> Arc<Corpus> {
    Arc::new(Corpus::new(vec![
        TrainingExample::new("Busco un portátil", "Mira los portátiles de 14 pulgadas."),
        TrainingExample::new("Quiero una cámara", "Una cámara sin espejo es ideal para empezar."),
        TrainingExample::new("Hola", "¡Hola! ¿En qué te ayudo?"),
    ]))
}
