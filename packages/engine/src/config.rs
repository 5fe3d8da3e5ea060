//! # Configuration
//!
//! Immutable per-run snapshot of the host's preferences. The pipeline
//! captures one at entry, so a preference change while a run is in flight
//! cannot affect it, and runs are testable with arbitrary combinations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Master toggle for the transformation stages. Attribution
    /// customization and the final cursor normalization run regardless.
    pub enabled: bool,

    /// Prune quoted blocks at or above `remove_quotes_level`.
    pub remove_quotes: bool,

    /// Quote depth threshold for pruning. Minimum 1.
    pub remove_quotes_level: u32,

    /// Leave the quoted sender's signature in place.
    pub keep_sender_signature: bool,

    /// Skip the paragraph break normally opened below the quote when the
    /// caret is parked above the user's own signature.
    pub no_whitespace_below_quote: bool,

    /// Leave stray blank lines at the start of the body alone.
    pub keep_leading_whitespace: bool,

    /// Strip stray blank lines from the end of the first quoted block.
    pub remove_trailing_whitespace: bool,

    /// Leave the linebreak run between the attribution line and the first
    /// quoted block alone.
    pub keep_attribution_whitespace: bool,

    pub use_custom_reply_attribution: bool,
    pub use_custom_forward_attribution: bool,

    /// Dormant. See `Pipeline::make_selectable_quotes`.
    pub selectable_quotes: bool,

    /// Surface pipeline failures to the caller instead of swallowing them,
    /// and capture the pre-run body markup in the result.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: true,
            remove_quotes: false,
            remove_quotes_level: 1,
            keep_sender_signature: false,
            no_whitespace_below_quote: false,
            keep_leading_whitespace: false,
            remove_trailing_whitespace: false,
            keep_attribution_whitespace: false,
            use_custom_reply_attribution: false,
            use_custom_forward_attribution: false,
            selectable_quotes: false,
            debug: false,
        }
    }
}
