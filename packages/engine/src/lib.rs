//! # Quotefix Engine
//!
//! Normalizes the HTML body of a composed reply or forward: prunes quoted
//! material beyond a configured depth, strips the quoted sender's leftover
//! signature, computes cursor commands that park the caret sensibly
//! relative to the quote and the user's own signature, and removes the
//! whitespace residue the quoting machinery leaves behind.
//!
//! The engine mutates the tree it is handed and emits [`CursorCommand`]s;
//! it never owns live selection state and never renders anything. One
//! [`Pipeline::run`] per compose-window load, synchronous, on the editor's
//! thread.
//!
//! A missing quote, a signature that doesn't match, or an absent own
//! signature are all normal outcomes. Outside debug mode nothing that goes
//! wrong in here ever escapes into the host's editing session.

pub mod attribution;
pub mod cleanup;
pub mod config;
pub mod cursor;
pub mod depth;
pub mod error;
pub mod matcher;
pub mod message;
pub mod place;
pub mod pipeline;
pub mod prune;
pub mod signature;

pub use attribution::{AttributionError, Attributor};
pub use config::Config;
pub use cursor::{CursorAnchor, CursorCommand, PipelineResult};
pub use depth::{quote_depth, QUOTE_CONTAINER_TAG};
pub use error::{EngineError, EngineResult};
pub use matcher::{SignatureMatcher, DEFAULT_SIGNATURE_PATTERN};
pub use message::MessageKind;
pub use pipeline::Pipeline;
pub use place::NEW_SIGNATURE_ID;
