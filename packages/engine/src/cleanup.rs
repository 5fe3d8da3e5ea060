//! # Layout Cleanup
//!
//! Three independently toggled passes over the body, each a no-op when its
//! target element is missing: strip stray blank lines from the start of the
//! body, strip them from the end of the first quoted block, and collapse
//! the linebreak run the quoting machinery leaves between the attribution
//! line and the quote.

use quotefix_dom::Document;
use tracing::debug;

use crate::config::Config;

/// Returns whether at least one node was removed.
pub fn cleanup_layout(doc: &Document, config: &Config) -> bool {
    let mut removed = 0usize;

    if !config.keep_leading_whitespace {
        if let Some(body) = doc.body() {
            removed += body.remove_stray_linefeeds_at_beginning();
        }
    }

    if config.remove_trailing_whitespace {
        if let Some(blockquote) = doc.first_descendant_blockquote() {
            removed += blockquote.remove_stray_linefeeds_at_end();
        }
    }

    if !config.keep_attribution_whitespace {
        if let Some(blockquote) = doc.first_descendant_blockquote() {
            while let Some(previous) = blockquote.previous_sibling() {
                if !previous.is_element_named("br") {
                    break;
                }
                previous.detach();
                removed += 1;
            }
        }
    }

    if removed > 0 {
        debug!(removed, "cleaned up stray whitespace");
    }
    removed > 0
}
