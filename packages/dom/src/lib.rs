//! # Quotefix DOM
//!
//! In-memory HTML node tree for the compose-body pipeline.
//!
//! The engine never touches raw message source. The host parser hands it an
//! already-parsed tree; this crate is that tree, plus the document
//! capabilities the pipeline consumes: tag queries, id lookup, sibling
//! navigation, subtree detachment, `inner_html` get/set, and the
//! stray-linefeed stripping primitives.
//!
//! Ownership is strictly top-down: a parent owns its children, and every
//! node keeps only a weak back-reference to its parent for traversal and
//! removal. Detaching a node drops the whole subtree once the last outside
//! handle goes away.
//!
//! The fragment parser included here stands in for the host parser in tests
//! and backs `set_inner_html`.

pub mod document;
pub mod error;
pub mod node;
pub mod parser;
pub mod serializer;
pub mod whitespace;

pub use document::Document;
pub use error::{DomError, DomResult, ParseError, ParseResult};
pub use node::NodeRef;
pub use parser::parse_fragment;
pub use serializer::is_void_element;
pub use whitespace::is_stray_linefeed;
