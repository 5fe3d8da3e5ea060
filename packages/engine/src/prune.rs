//! Blockquote pruning

use quotefix_dom::Document;
use tracing::debug;

use crate::depth::{quote_depth, QUOTE_CONTAINER_TAG};

/// Detach every quote container whose depth is at or above `level`.
///
/// Containers that already vanished inside a pruned ancestor are skipped,
/// which also makes a second pass at the same level a no-op. Returns
/// whether at least one container was detached.
pub fn prune_quotes(doc: &Document, level: u32) -> bool {
    let mut pruned = 0usize;
    for blockquote in doc.query_selector_all(QUOTE_CONTAINER_TAG) {
        if !blockquote.is_attached_to(doc.root()) {
            continue;
        }
        if quote_depth(&blockquote) as u32 >= level {
            blockquote.detach();
            pruned += 1;
        }
    }
    if pruned > 0 {
        debug!(pruned, level, "removed quoted blocks");
    }
    pruned > 0
}
