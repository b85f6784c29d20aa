use serde::{self, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Usage;

/// Deserializes `T`, falling back to `None` when the value is null or has an
/// unexpected shape. Only the answer path matters, so a stray field never
/// fails the whole reply.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MessageAssistant {
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Choice {
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub message: Option<MessageAssistant>,
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub finish_reason: Option<String>,
}

/// Older local servers answer with `{"joke_response": {"joke": "..."}}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct JokeResponse {
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub joke: Option<String>,
}

/// Non-streaming completion body. Every field is optional and defaults to
/// `None` when missing, null or mistyped.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChatCompletion {
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub choices: Option<Vec<Choice>>,
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "lenient")]
    pub joke_response: Option<JokeResponse>,
}

impl ChatCompletion {
    /// First non-empty text among `choices[0].message.content` and
    /// `joke_response.joke`.
    pub fn answer(&self) -> Option<&str> {
        let from_choice = self
            .choices
            .as_deref()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref());
        let from_joke = self
            .joke_response
            .as_ref()
            .and_then(|joke| joke.joke.as_deref());

        from_choice
            .into_iter()
            .chain(from_joke)
            .find(|text| !text.is_empty())
    }
}
