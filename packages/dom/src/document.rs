//! # Document Handle
//!
//! Owns the root of one message body tree for the duration of a pipeline
//! run and exposes the lookup surface the pipeline consumes. The tree is
//! handed back to the host, possibly mutated in place, when the run ends;
//! nothing here survives across runs.

use tracing::trace;

use crate::error::ParseResult;
use crate::node::NodeRef;
use crate::parser::parse_fragment;

/// One message body document.
#[derive(Debug)]
pub struct Document {
    root: NodeRef,
}

/// The body container is not handed over uniformly across host revisions:
/// sometimes the document element wraps a `body`, sometimes the body content
/// arrives as the root itself. Probe the known shapes in order and take the
/// first that resolves.
type BodyProbe = fn(&Document) -> Option<NodeRef>;

const BODY_PROBES: &[(&str, BodyProbe)] = &[
    ("body-tag", |doc| {
        doc.root.descendants().find(|n| n.is_element_named("body"))
    }),
    ("document-element", |doc| Some(doc.root.clone())),
];

impl Document {
    /// Wrap an existing tree.
    pub fn from_root(root: NodeRef) -> Self {
        Document { root }
    }

    /// Parse markup into a document. A complete document (a single `html`
    /// element) becomes the root as-is; anything else is treated as body
    /// content and wrapped the way the host parser would wrap it.
    pub fn parse(markup: &str) -> ParseResult<Self> {
        let nodes = parse_fragment(markup)?;

        let significant: Vec<&NodeRef> = nodes
            .iter()
            .filter(|n| !n.text().map_or(false, |t| t.chars().all(char::is_whitespace)))
            .collect();
        if let [only] = significant.as_slice() {
            if only.is_element_named("html") {
                return Ok(Document {
                    root: (*only).clone(),
                });
            }
        }

        let body = NodeRef::element("body");
        for node in nodes {
            body.append_unchecked(&node);
        }
        let root = NodeRef::element("html");
        root.append_unchecked(&body);
        Ok(Document { root })
    }

    /// The document element.
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// The body container, resolved through the ordered probe list.
    pub fn body(&self) -> Option<NodeRef> {
        for &(name, probe) in BODY_PROBES {
            if let Some(node) = probe(self) {
                trace!(probe = name, "resolved body container");
                return Some(node);
            }
        }
        None
    }

    /// All elements matching a tag-name selector, in document order.
    /// Comma-separated selectors match any of the listed tags.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeRef> {
        let tags: Vec<String> = selector
            .split(',')
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self.root
            .descendants()
            .filter(|node| node.tag().map_or(false, |tag| tags.iter().any(|t| t == tag)))
            .collect()
    }

    /// First element in document order with the given `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeRef> {
        self.root
            .descendants()
            .find(|node| node.attribute("id").map_or(false, |value| value == id))
    }

    /// First quote container in document order, the upper bound for
    /// signature removal.
    pub fn first_descendant_blockquote(&self) -> Option<NodeRef> {
        self.root
            .descendants()
            .find(|node| node.is_element_named("blockquote"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wraps_fragment_in_body() {
        let doc = Document::parse("<div>Hi</div><blockquote>quoted</blockquote>").unwrap();
        assert!(doc.root().is_element_named("html"));
        let body = doc.body().unwrap();
        assert!(body.is_element_named("body"));
        assert_eq!(body.children().len(), 2);
    }

    #[test]
    fn test_parse_keeps_full_document_root() {
        let doc = Document::parse("<html><body><div>x</div></body></html>\n").unwrap();
        assert!(doc.root().is_element_named("html"));
        assert!(doc.body().unwrap().is_element_named("body"));
    }

    #[test]
    fn test_body_probe_falls_back_to_root() {
        let root = NodeRef::element("div").with_child(NodeRef::text_node("bare content"));
        let doc = Document::from_root(root.clone());
        assert_eq!(doc.body(), Some(root));
    }

    #[test]
    fn test_query_selector_interleaves_grouped_tags() {
        let doc = Document::parse("<div>a<br>b</div><br><div>c</div>").unwrap();
        let hits = doc.query_selector_all("div, br");
        let tags: Vec<&str> = hits.iter().filter_map(|n| n.tag()).collect();
        // document order, not one tag sweep after the other
        assert_eq!(tags, ["div", "br", "br", "div"]);
    }

    #[test]
    fn test_get_element_by_id() {
        let doc = Document::parse(r#"<div id="a">x</div><div id="b">y</div>"#).unwrap();
        assert_eq!(
            doc.get_element_by_id("b").unwrap().inner_html(),
            "y"
        );
        assert!(doc.get_element_by_id("missing").is_none());
    }

    #[test]
    fn test_first_descendant_blockquote() {
        let doc = Document::parse(
            "<div>reply</div><blockquote>outer<blockquote>inner</blockquote></blockquote>",
        )
        .unwrap();
        let first = doc.first_descendant_blockquote().unwrap();
        assert_eq!(first.inner_html(), "outer<blockquote>inner</blockquote>");
    }
}
