//! Live test against the Groq API.
//!
//! Requires `GROQ_API_KEY` in the environment.
//!
//! Run with: `cargo test -p mindcare-llm --test groq -- --ignored`

use mindcare_llm::chat::{ChatMessage, ChatProvider};
use mindcare_llm::groq::{DEFAULT_MODEL, GroqClient};
use mindcare_llm::prompt::build_system_prompt;

#[tokio::test]
#[ignore]
async fn live_completion_returns_text() {
    let api_key = std::env::var("GROQ_API_KEY").expect("GROQ_API_KEY must be set");
    let client = GroqClient::new(api_key, None, None);
    assert_eq!(client.model(), DEFAULT_MODEL);

    let prompt = build_system_prompt(None);
    let reply = client
        .generate_response(&prompt, &[ChatMessage::user("I've been feeling stressed at work.")])
        .await
        .expect("completion should succeed");

    assert!(!reply.trim().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_request_failure() {
    let client = GroqClient::new(
        "test-key".to_string(),
        None,
        Some("http://127.0.0.1:9/v1".to_string()),
    );

    let err = client
        .generate_response("system", &[ChatMessage::user("hello")])
        .await
        .unwrap_err();
    assert!(matches!(err, mindcare_llm::error::LlmError::RequestFailed(_)));
}
