//! Error types for the engine

use thiserror::Error;

use crate::attribution::AttributionError;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid signature pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("document operation failed: {0}")]
    Dom(#[from] quotefix_dom::DomError),

    #[error("attribution customization failed: {0}")]
    Attribution(#[from] AttributionError),
}
