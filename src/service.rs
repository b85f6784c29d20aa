use std::sync::Arc;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::errors::RecommenderError;
use crate::fallback::FallbackResponder;
use crate::llm_client::{LLMClient, LLMClientTrait};
use crate::matcher::Matcher;
use crate::models::recommendation::RecommendationResponse;

/// Which path produced the reply. Both are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    Matched(String),
    Fallback(String),
}

impl Recommendation {
    pub fn text(&self) -> &str {
        match self {
            Recommendation::Matched(text) | Recommendation::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Recommendation::Matched(text) | Recommendation::Fallback(text) => text,
        }
    }
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        RecommendationResponse {
            response: recommendation.into_text(),
        }
    }
}

pub struct RecommendationService {
    matcher: Matcher,
    fallback: FallbackResponder,
}

impl RecommendationService {
    pub fn new(matcher: Matcher, fallback: FallbackResponder) -> Self {
        Self { matcher, fallback }
    }

    /// Wires the corpus, matcher and an HTTP-backed fallback from `config`.
    pub fn from_config(
        config: &Config,
        corpus: Arc<Corpus>,
        http_client: reqwest::Client,
    ) -> Result<Self, RecommenderError> {
        let matcher = Matcher::new(corpus, config.matcher.cutoff)?;
        let llm_client: Arc<dyn LLMClientTrait> = Arc::new(LLMClient::new(
            http_client,
            &config.llm.api_url,
            config.llm.api_key.as_deref(),
        ));
        let fallback = FallbackResponder::new(llm_client, &config.llm);
        Ok(Self::new(matcher, fallback))
    }

    pub async fn recommend(&self, user_input: &str) -> Recommendation {
        if let Some(response) = self.matcher.find_response(user_input) {
            log::info!("matched corpus entry");
            return Recommendation::Matched(response.to_string());
        }

        log::info!("no corpus match, asking local model");
        Recommendation::Fallback(self.fallback.respond(user_input).await)
    }
}
