use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("animation speed must be a finite value above zero, got {0}")]
    InvalidSpeed(f32),
    #[error("element count must be at least 1")]
    EmptyStage,
}
