use std::fmt;

#[derive(Debug, Clone)]
pub enum RecommenderError {
    ApiError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
}

impl fmt::Display for RecommenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommenderError::ApiError(msg) => write!(f, "API error: {}", msg),
            RecommenderError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RecommenderError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            RecommenderError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for RecommenderError {}

/// `err` followed by each of its sources, so "connection refused" survives
/// reqwest's outer "error sending request" message.
fn with_sources(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

impl From<reqwest::Error> for RecommenderError {
    fn from(err: reqwest::Error) -> Self {
        let text = with_sources(&err);
        if err.is_timeout() || err.is_connect() {
            RecommenderError::NetworkError(text)
        } else if err.is_decode() {
            RecommenderError::ParseError(text)
        } else {
            RecommenderError::ApiError(text)
        }
    }
}

impl From<serde_json::Error> for RecommenderError {
    fn from(err: serde_json::Error) -> Self {
        RecommenderError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for RecommenderError {
    fn from(err: std::io::Error) -> Self {
        RecommenderError::ConfigError(err.to_string())
    }
}
