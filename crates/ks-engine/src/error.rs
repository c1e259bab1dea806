//! Error types for the engine.

/// Result type for engine construction and configuration.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while setting up a game.
///
/// Gameplay itself never fails: a spin while spinning or a purchase without
/// enough coins is a normal outcome, reported through return values.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A JSON configuration document could not be parsed.
    #[error("could not parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The symbol catalog was rejected.
    #[error("{0}")]
    Catalog(#[from] ks_core::CoreError),
}
