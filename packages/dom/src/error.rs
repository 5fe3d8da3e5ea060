//! Error types for the document tree

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;
pub type DomResult<T> = Result<T, DomError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEof { context: &'static str },
}

#[derive(Error, Debug)]
pub enum DomError {
    #[error("node is not an element")]
    NotAnElement,

    #[error("node is not a child of this node")]
    NotAChild,

    #[error("operation would create a cycle")]
    CycleDetected,

    #[error("markup error: {0}")]
    Parse(#[from] ParseError),
}
