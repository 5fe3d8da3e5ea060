//! # Signature Removal
//!
//! Finds the quoted sender's leftover signature inside the outermost quoted
//! block and deletes it together with everything that follows it in that
//! block, sparing attachment markers.
//!
//! Signatures come wrapped in nested div/br hierarchies, so a sibling-only
//! sweep would stop at the first container boundary and leave trailing
//! fragments behind. The removal walk therefore climbs out of exhausted
//! containers and keeps deleting, bounded by the quoted block being
//! cleaned.

use quotefix_dom::{Document, NodeRef};
use tracing::debug;

use crate::cursor::CursorCommand;
use crate::depth::quote_depth;
use crate::error::EngineResult;
use crate::matcher::SignatureMatcher;

/// Tag marking an inline attachment. Attachments survive signature removal.
const ATTACHMENT_TAG: &str = "object";

/// Excise the sender's leftover signature.
///
/// Returns the cursor commands to replay on success, or `None` when there
/// is no quoted block or nothing matches — both normal outcomes that leave
/// the tree untouched.
pub fn remove_old_signature(
    doc: &Document,
    matcher: &SignatureMatcher,
) -> EngineResult<Option<Vec<CursorCommand>>> {
    let blockquote = match doc.first_descendant_blockquote() {
        Some(blockquote) => blockquote,
        None => return Ok(None),
    };

    let signature = match find_signature_anchor(doc, matcher) {
        Some(node) => node,
        None => return Ok(None),
    };
    debug!(anchor = ?signature, "found sender signature");

    remove_from_anchor(&signature, &blockquote)?;

    // the removal leaves a ragged edge on the quoted block
    blockquote.remove_stray_linefeeds();

    Ok(Some(vec![
        CursorCommand::MoveDown,
        CursorCommand::InsertParagraphBreak,
    ]))
}

/// Scan `div` and `br` elements at quote depth 1, in document order, for
/// the first one that reads like a signature.
///
/// A `br` carries no text of its own, so it matches through its immediate
/// next sibling, and only when that sibling is a text node. A `div` matches
/// on its serialized content.
fn find_signature_anchor(doc: &Document, matcher: &SignatureMatcher) -> Option<NodeRef> {
    doc.query_selector_all("div, br")
        .into_iter()
        .filter(|node| quote_depth(node) == 1)
        .find(|node| match node.tag() {
            Some("br") => node
                .next_sibling()
                .and_then(|sibling| sibling.text().map(str::to_string))
                .map_or(false, |text| matcher.matches(&text)),
            Some("div") => matcher.matches(&node.inner_html()),
            _ => false,
        })
}

/// Delete `anchor` and everything after it, stepping over attachment
/// markers, climbing out of exhausted containers, and never crossing out of
/// `bounding`. The bounding block itself is never detached; a climb that
/// would leave the tree ends the walk.
fn remove_from_anchor(anchor: &NodeRef, bounding: &NodeRef) -> EngineResult<()> {
    let mut parent = match anchor.parent() {
        Some(parent) => parent,
        None => return Ok(()),
    };
    let mut node = Some(anchor.clone());

    while let Some(current) = node {
        if current.same_node(bounding) {
            break;
        }
        if current.is_element_named(ATTACHMENT_TAG) {
            node = current.next_sibling();
        } else {
            let next = current.next_sibling();
            parent.remove_child(&current)?;
            node = next;
        }
        while node.is_none() && !parent.same_node(bounding) {
            match parent.parent() {
                Some(grandparent) => {
                    node = parent.next_sibling();
                    parent = grandparent;
                }
                None => break,
            }
        }
    }
    Ok(())
}
