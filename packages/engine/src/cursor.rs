//! # Cursor Commands
//!
//! The engine computes where the caret should go but never touches live
//! selection state. It emits commands; the host replays them, in order,
//! against the editing widget it owns.

use quotefix_dom::NodeRef;

/// A logical selection target, translated by the host into an actual
/// selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorAnchor {
    /// Select the node in full.
    SelectNode(NodeRef),
    /// Place the caret inside `node` at character `offset`.
    Caret { node: NodeRef, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorCommand {
    MoveToEnd,
    MoveToBeginningOfLine,
    MoveUp,
    MoveDown,
    InsertParagraphBreak,
    InsertNewline,
    SetSelection(CursorAnchor),
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    /// Whether any stage changed the tree. The host uses this to keep its
    /// own "has changes" flag clear: these edits are editorial cleanup, not
    /// user authorship.
    pub mutated: bool,

    /// Commands for the host to replay against the live editor.
    pub cursor_ops: Vec<CursorCommand>,

    /// Body markup captured before any stage ran. Only present in debug
    /// mode.
    pub original_html: Option<String>,
}

impl PipelineResult {
    /// Reported when the failure boundary swallows an error: nothing
    /// changed, nothing for the host to do.
    pub fn unchanged() -> Self {
        PipelineResult {
            mutated: false,
            cursor_ops: Vec::new(),
            original_html: None,
        }
    }
}
