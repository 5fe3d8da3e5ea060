//! # Attribution Boundary
//!
//! The attribution line ("On ... Jane wrote:") is rewritten by an external
//! collaborator. The engine only decides when to invoke it and how its
//! failures are contained; it never generates attribution text itself.

use quotefix_dom::Document;
use thiserror::Error;

/// Failure inside an attribution collaborator, carried as a message so the
/// pipeline can report it without knowing the collaborator's internals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct AttributionError(pub String);

/// External collaborator that rewrites the attribution line above quoted
/// content. Implementations return whether they changed the document.
pub trait Attributor {
    fn customize_reply(&self, doc: &Document) -> Result<bool, AttributionError>;

    fn customize_forward(&self, doc: &Document) -> Result<bool, AttributionError>;
}
