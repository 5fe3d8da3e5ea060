//! # Serializer
//!
//! Turns subtrees back into markup. `inner_html` is what the signature
//! matcher runs against for candidate containers, so serialization is
//! deterministic: attributes keep insertion order and non-breaking spaces
//! round-trip as `&nbsp;`.

use crate::error::{DomError, DomResult};
use crate::node::NodeRef;
use crate::parser::parse_fragment;

/// Elements serialized without a closing tag.
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

impl NodeRef {
    /// Serialized content of this node, children only.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            serialize_into(&child, &mut out);
        }
        out
    }

    /// Serialized form of this node including itself.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        serialize_into(self, &mut out);
        out
    }

    /// Replace this element's children with the parse of `markup`.
    pub fn set_inner_html(&self, markup: &str) -> DomResult<()> {
        if !self.is_element() {
            return Err(DomError::NotAnElement);
        }
        let nodes = parse_fragment(markup)?;
        for child in self.children() {
            child.detach();
        }
        for node in nodes {
            self.append_unchecked(&node);
        }
        Ok(())
    }
}

fn serialize_into(node: &NodeRef, out: &mut String) {
    if let Some(text) = node.text() {
        escape_into(text, false, out);
        return;
    }
    if let Some(tag) = node.tag() {
        out.push('<');
        out.push_str(tag);
        for (name, value) in node.attributes() {
            out.push(' ');
            out.push_str(&name);
            out.push_str("=\"");
            escape_into(&value, true, out);
            out.push('"');
        }
        out.push('>');
        if is_void_element(tag) {
            return;
        }
        for child in node.children() {
            serialize_into(&child, out);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn escape_into(text: &str, in_attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
