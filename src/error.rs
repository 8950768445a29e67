use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        /// Raw TOML text, kept for span-aware diagnostics.
        content: String,
    },
}

/// Errors from the LLM completion call.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("no API key provided: set GROQ_API_KEY, pass --api-key, or enter one when prompted")]
    MissingApiKey,

    #[error("API key rejected by the provider: {0}")]
    AuthRejected(String),

    #[error("completion request failed: {0}")]
    RequestFailed(String),

    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// Errors from classifying or executing a generated statement.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("statement refused: {reason}\n  SQL: {sql}")]
    Refused { sql: String, reason: String },

    #[error("failed to open database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to execute statement: {source}\n  SQL: {sql}")]
    Execute {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
