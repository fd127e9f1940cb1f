use std::path::PathBuf;

/// Errors raised by rule engines, the search and the game orchestrator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The state cannot have been reached by alternating play, or has no
    /// player left to move
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The action is out of range or targets an occupied cell or full column
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// An exact value was requested for a state that is not terminal
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    /// A move was requested after the game already ended
    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
