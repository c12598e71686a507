// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy for the render pipeline.

use thiserror::Error;

/// Everything that can go wrong in a render call. All variants are
/// terminal for the call; nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or non-finite input data, rejected at series construction.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bad surface configuration, rejected before any drawing work.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Failure reported by the drawing surface during stroke/encode/write.
    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
