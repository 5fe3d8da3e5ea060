//! Quote depth classification

use quotefix_dom::NodeRef;

/// Tag of the container the mail editor nests quoted messages in.
pub const QUOTE_CONTAINER_TAG: &str = "blockquote";

/// Number of quote containers enclosing `node`, counting the node itself
/// when it is one. Depth 0 is freshly authored content; depth 1 is the
/// immediately preceding sender's message; anything deeper is nested
/// quoting.
///
/// Recomputed on demand. Pruning changes ancestry, so the value must never
/// be cached across mutations.
pub fn quote_depth(node: &NodeRef) -> usize {
    let inherited = node
        .ancestors()
        .filter(|ancestor| ancestor.is_element_named(QUOTE_CONTAINER_TAG))
        .count();
    if node.is_element_named(QUOTE_CONTAINER_TAG) {
        inherited + 1
    } else {
        inherited
    }
}
