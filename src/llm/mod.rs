//! LLM client abstraction for question translation.

mod groq;

pub use groq::Groq;

use async_trait::async_trait;

use crate::error::Result;

/// LLM completion client trait.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Send a system + user message pair and return the response text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Scripted LLM for tests.
#[cfg(any(test, feature = "testkit"))]
pub mod testkit {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::Llm;
    use crate::error::{LlmError, Result};

    pub struct MockLlm {
        response: Option<String>,
        seen: Mutex<Vec<String>>,
    }

    impl MockLlm {
        pub fn new(response: impl Into<String>) -> Self {
            Self {
                response: Some(response.into()),
                seen: Mutex::new(Vec::new()),
            }
        }

        /// A mock whose completion call always fails.
        pub fn failing() -> Self {
            Self {
                response: None,
                seen: Mutex::new(Vec::new()),
            }
        }

        /// Prompts received so far, as `system\n---\nuser` pairs.
        pub fn prompts(&self) -> Vec<String> {
            self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl Llm for MockLlm {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn complete(&self, system: &str, user: &str) -> Result<String> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(format!("{system}\n---\n{user}"));
            }
            match &self.response {
                Some(response) => Ok(response.clone()),
                None => Err(LlmError::RequestFailed("scripted failure".into()).into()),
            }
        }
    }
}

#[cfg(test)]
mod internal_tests {
    use super::testkit::MockLlm;
    use super::*;

    #[tokio::test]
    async fn mock_llm_returns_response() {
        let llm = MockLlm::new("SELECT COUNT(*) FROM candidates;");
        let result = llm.complete("system", "how many?").await.unwrap();
        assert_eq!(result, "SELECT COUNT(*) FROM candidates;");
    }

    #[tokio::test]
    async fn mock_llm_records_prompts() {
        let llm = MockLlm::new("SELECT 1");
        llm.complete("sys", "user question").await.unwrap();
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("user question"));
    }

    #[tokio::test]
    async fn failing_mock_returns_error() {
        let llm = MockLlm::failing();
        assert!(llm.complete("sys", "user").await.is_err());
    }
}
