//! # Document Nodes
//!
//! Reference-counted node handles over a parent-owned tree.
//!
//! A node is either an Element (tag plus attributes) or a Text run. Children
//! live in the parent's child list; the parent pointer is a `Weak` used for
//! navigation only, so detaching a subtree cannot leak through a cycle.
//!
//! Invariants:
//! - the tree is acyclic; `append_child` rejects an ancestor as a child
//! - a detached node has no parent and no siblings
//! - tag and attribute names are stored lowercase

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{DomError, DomResult};

/// Payload of a node.
enum NodeData {
    Element {
        tag: String,
        attributes: RefCell<Vec<(String, String)>>,
    },
    Text {
        content: String,
    },
}

struct Node {
    data: NodeData,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<NodeRef>>,
}

/// Cheaply clonable handle to a node. Equality is node identity, not
/// structural equality.
#[derive(Clone)]
pub struct NodeRef(Rc<Node>);

impl NodeRef {
    /// Create a detached element. The tag is normalized to lowercase.
    pub fn element(tag: impl Into<String>) -> Self {
        NodeRef(Rc::new(Node {
            data: NodeData::Element {
                tag: tag.into().to_ascii_lowercase(),
                attributes: RefCell::new(Vec::new()),
            },
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    /// Create a detached text node.
    pub fn text_node(content: impl Into<String>) -> Self {
        NodeRef(Rc::new(Node {
            data: NodeData::Text {
                content: content.into(),
            },
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    /// Builder form of [`set_attribute`](Self::set_attribute). No-op on a
    /// text node.
    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`append_child`](Self::append_child). Appending onto
    /// a text node or appending an ancestor is ignored.
    pub fn with_child(self, child: NodeRef) -> Self {
        let _ = self.append_child(&child);
        self
    }

    /// Append `child` as the last child, detaching it from any previous
    /// parent first.
    pub fn append_child(&self, child: &NodeRef) -> DomResult<()> {
        if !self.is_element() {
            return Err(DomError::NotAnElement);
        }
        if self.same_node(child) || self.has_ancestor(child) {
            return Err(DomError::CycleDetected);
        }
        self.append_unchecked(child);
        Ok(())
    }

    /// Append without the cycle check. Callers guarantee `child` is not an
    /// ancestor of `self`.
    pub(crate) fn append_unchecked(&self, child: &NodeRef) {
        child.detach();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    /// Detach `child` from this node's child list.
    pub fn remove_child(&self, child: &NodeRef) -> DomResult<()> {
        match child.parent() {
            Some(parent) if parent.same_node(self) => {
                child.detach();
                Ok(())
            }
            _ => Err(DomError::NotAChild),
        }
    }

    /// Detach this node (and its subtree) from its parent. Returns whether
    /// the node was attached to begin with.
    pub fn detach(&self) -> bool {
        let parent = match self.parent() {
            Some(parent) => parent,
            None => return false,
        };
        let mut siblings = parent.0.children.borrow_mut();
        if let Some(pos) = siblings.iter().position(|c| c.same_node(self)) {
            siblings.remove(pos);
        }
        drop(siblings);
        *self.0.parent.borrow_mut() = Weak::new();
        true
    }

    pub fn parent(&self) -> Option<NodeRef> {
        self.0.parent.borrow().upgrade().map(NodeRef)
    }

    /// Snapshot of the child list.
    pub fn children(&self) -> Vec<NodeRef> {
        self.0.children.borrow().clone()
    }

    pub fn first_child(&self) -> Option<NodeRef> {
        self.0.children.borrow().first().cloned()
    }

    pub fn last_child(&self) -> Option<NodeRef> {
        self.0.children.borrow().last().cloned()
    }

    pub fn next_sibling(&self) -> Option<NodeRef> {
        let parent = self.parent()?;
        let siblings = parent.0.children.borrow();
        let pos = siblings.iter().position(|c| c.same_node(self))?;
        siblings.get(pos + 1).cloned()
    }

    pub fn previous_sibling(&self) -> Option<NodeRef> {
        let parent = self.parent()?;
        let siblings = parent.0.children.borrow();
        let pos = siblings.iter().position(|c| c.same_node(self))?;
        pos.checked_sub(1).and_then(|prev| siblings.get(prev).cloned())
    }

    /// Identity comparison.
    pub fn same_node(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn has_ancestor(&self, other: &NodeRef) -> bool {
        self.ancestors().any(|a| a.same_node(other))
    }

    /// True when `root` is this node or one of its ancestors. A node pruned
    /// together with an enclosing subtree stops being attached.
    pub fn is_attached_to(&self, root: &NodeRef) -> bool {
        self.same_node(root) || self.has_ancestor(root)
    }

    /// Ancestors from the parent upward, excluding this node.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Pre-order (document order) traversal of the subtree, excluding this
    /// node itself.
    pub fn descendants(&self) -> Descendants {
        let mut stack = self.children();
        stack.reverse();
        Descendants { stack }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.0.data, NodeData::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.0.data, NodeData::Text { .. })
    }

    /// Lowercase tag name, or `None` for a text node.
    pub fn tag(&self) -> Option<&str> {
        match &self.0.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text { .. } => None,
        }
    }

    /// True for an element with the given tag name (compared
    /// case-insensitively).
    pub fn is_element_named(&self, name: &str) -> bool {
        self.tag().map_or(false, |tag| tag.eq_ignore_ascii_case(name))
    }

    /// Text content, or `None` for an element.
    pub fn text(&self) -> Option<&str> {
        match &self.0.data {
            NodeData::Text { content } => Some(content),
            NodeData::Element { .. } => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        match &self.0.data {
            NodeData::Element { attributes, .. } => attributes
                .borrow()
                .iter()
                .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.clone()),
            NodeData::Text { .. } => None,
        }
    }

    /// Snapshot of the attribute list in insertion order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        match &self.0.data {
            NodeData::Element { attributes, .. } => attributes.borrow().clone(),
            NodeData::Text { .. } => Vec::new(),
        }
    }

    /// Set or replace an attribute. No-op on a text node.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        if let NodeData::Element { attributes, .. } = &self.0.data {
            let name = name.into().to_ascii_lowercase();
            let value = value.into();
            let mut attributes = attributes.borrow_mut();
            match attributes.iter_mut().find(|(attr, _)| *attr == name) {
                Some(slot) => slot.1 = value,
                None => attributes.push((name, value)),
            }
        }
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
    }
}

impl Eq for NodeRef {}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.data {
            NodeData::Element { tag, .. } => {
                write!(f, "<{}> ({} children)", tag, self.0.children.borrow().len())
            }
            NodeData::Text { content } => write!(f, "Text({:?})", content),
        }
    }
}

pub struct Ancestors {
    next: Option<NodeRef>,
}

impl Iterator for Ancestors {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

pub struct Descendants {
    stack: Vec<NodeRef>,
}

impl Iterator for Descendants {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        let node = self.stack.pop()?;
        let mut children = node.children();
        children.reverse();
        self.stack.extend(children);
        Some(node)
    }
}
