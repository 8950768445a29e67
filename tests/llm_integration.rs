//! Integration tests for the Groq client.
//!
//! These tests require a real API key and network access to run.
//!
//! # Running Integration Tests
//!
//! Integration tests are gated behind the `integration-tests` feature flag
//! and are marked with `#[ignore]` to prevent accidental execution.
//!
//! ## Prerequisites
//!
//! ```bash
//! export GROQ_API_KEY="your-groq-api-key"
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo test --features integration-tests -- --ignored
//! ```
//!
//! # Cost Considerations
//!
//! These tests make real API calls. They are designed to use minimal
//! tokens (short prompts, one completion each) but still consume quota.

#![cfg(feature = "integration-tests")]

use vigilo::config::LlmConfig;
use vigilo::db::schema::default_candidates_schema;
use vigilo::llm::{Groq, Llm};
use vigilo::prompt::{sanitize_completion, PromptBuilder};

#[tokio::test]
#[ignore = "requires GROQ_API_KEY and network access"]
async fn groq_completes_a_minimal_prompt() {
    let client = Groq::from_env(&LlmConfig::default()).expect("GROQ_API_KEY must be set");

    let reply = client
        .complete(
            "You are a connectivity probe. Reply with the single word OK.",
            "ping",
        )
        .await
        .expect("completion should succeed");

    assert!(!reply.trim().is_empty());
}

#[tokio::test]
#[ignore = "requires GROQ_API_KEY and network access"]
async fn groq_translates_a_count_question_into_select() {
    let client = Groq::from_env(&LlmConfig::default()).expect("GROQ_API_KEY must be set");
    let builder = PromptBuilder::new(default_candidates_schema());

    let raw = client
        .complete(
            &builder.system_prompt(),
            "How many records are available in the table?",
        )
        .await
        .expect("completion should succeed");

    let sql = sanitize_completion(&raw);
    assert!(
        sql.to_ascii_uppercase().starts_with("SELECT"),
        "expected a SELECT, got: {sql}"
    );
}

#[tokio::test]
#[ignore = "requires GROQ_API_KEY and network access"]
async fn groq_rejects_a_bogus_key() {
    let client = Groq::new(
        "gsk_definitely_not_a_real_key",
        "gemma2-9b-it",
        64,
        0.0,
        std::time::Duration::from_secs(30),
    )
    .expect("client construction is local");

    let err = client
        .complete("You are a probe.", "ping")
        .await
        .expect_err("bogus key must be rejected");
    assert!(err.to_string().contains("rejected"));
}
