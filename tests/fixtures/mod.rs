#![allow(dead_code)]

use serde_json::{Value, json};

pub const UNMATCHED_INPUT: &str = "¿Qué libro me recomiendas para el verano?";

pub fn sample_completion_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 24, "completion_tokens": 12, "total_tokens": 36}
    })
}

pub fn sample_empty_completion_response() -> Value {
    json!({
        "id": "chatcmpl-test-2",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "test-model",
        "choices": []
    })
}

pub fn sample_legacy_joke_response(joke: &str) -> Value {
    json!({"joke_response": {"joke": joke}})
}

pub fn expected_outbound_request(user_input: &str) -> Value {
    json!({
        "model": "test-model",
        "messages": [
            {"role": "system", "content": "You are a helpful assistant."},
            {"role": "user", "content": user_input}
        ],
        "temperature": 0.7,
        "max_tokens": 50,
        "stream": false
    })
}
