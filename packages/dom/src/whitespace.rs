//! # Stray Linefeeds
//!
//! The quoting machinery pads quoted blocks with empty lines: lone `<br>`
//! elements and whitespace-only text nodes. These primitives strip that
//! residue from the edges of a container without touching real content.

use crate::node::NodeRef;

/// A stray linefeed is a `<br>` element or a text node containing only
/// whitespace (non-breaking spaces included).
pub fn is_stray_linefeed(node: &NodeRef) -> bool {
    if node.is_element_named("br") {
        return true;
    }
    node.text().map_or(false, |t| t.chars().all(char::is_whitespace))
}

impl NodeRef {
    /// Strip stray linefeeds from the start of this node's child list.
    /// Returns the number of nodes removed.
    pub fn remove_stray_linefeeds_at_beginning(&self) -> usize {
        let mut removed = 0;
        while let Some(first) = self.first_child() {
            if !is_stray_linefeed(&first) {
                break;
            }
            first.detach();
            removed += 1;
        }
        removed
    }

    /// Strip stray linefeeds from the end of this node's child list.
    /// Returns the number of nodes removed.
    pub fn remove_stray_linefeeds_at_end(&self) -> usize {
        let mut removed = 0;
        while let Some(last) = self.last_child() {
            if !is_stray_linefeed(&last) {
                break;
            }
            last.detach();
            removed += 1;
        }
        removed
    }

    /// Strip stray linefeeds from both edges.
    pub fn remove_stray_linefeeds(&self) -> usize {
        self.remove_stray_linefeeds_at_beginning() + self.remove_stray_linefeeds_at_end()
    }
}
