//! # Signature Matcher
//!
//! A configurable predicate deciding whether a text fragment looks like a
//! sender's signature. Built once per run from the configured pattern,
//! stateless afterwards.

use regex::Regex;

use crate::error::EngineResult;

/// Pattern used when the host has nothing configured: the classic `-- `
/// delimiter line, tolerating the non-breaking spaces the editor's
/// serializer leaves behind.
pub const DEFAULT_SIGNATURE_PATTERN: &str = r"(?m)^\s*--(\s|&nbsp;)*$";

#[derive(Debug, Clone)]
pub struct SignatureMatcher {
    pattern: Regex,
}

impl SignatureMatcher {
    pub fn new(pattern: &str) -> EngineResult<Self> {
        Ok(SignatureMatcher {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Search semantics: a match anywhere in `text` counts.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
