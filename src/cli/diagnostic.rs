//! Miette-based error diagnostics for beautiful CLI errors.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration parse error with source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(vigilo::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a spanned diagnostic from a TOML parse failure.
    pub fn from_toml(error: &toml::de::Error, content: &str) -> Self {
        let span: SourceSpan = match error.span() {
            Some(range) => (range.start, range.end.saturating_sub(range.start)).into(),
            None => (0, 0).into(),
        };

        Self {
            message: error.message().to_string(),
            src: content.to_string(),
            span,
            help: Some("compare with config.toml.example (vigilo config init)".to_string()),
        }
    }
}
