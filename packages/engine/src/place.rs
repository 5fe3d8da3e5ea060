//! New-signature cursor placement

use quotefix_dom::Document;

use crate::config::Config;
use crate::cursor::{CursorAnchor, CursorCommand};

/// Id under which the host inserts the user's own signature block.
pub const NEW_SIGNATURE_ID: &str = "AppleMailSignature";

/// Compute the cursor motion that parks the caret above the user's own
/// signature: select the signature block, step up, and open a paragraph
/// below the quote unless configured not to.
///
/// `None` when the account has no signature — a normal outcome; the
/// orchestrator opens a fresh line instead.
pub fn place_above_new_signature(doc: &Document, config: &Config) -> Option<Vec<CursorCommand>> {
    let signature = doc.get_element_by_id(NEW_SIGNATURE_ID)?;

    let mut ops = vec![
        CursorCommand::SetSelection(CursorAnchor::SelectNode(signature)),
        CursorCommand::MoveUp,
    ];
    if !config.no_whitespace_below_quote {
        ops.push(CursorCommand::InsertParagraphBreak);
    }
    Some(ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_above_signature_block() {
        let doc = Document::parse(
            r#"<br><div id="AppleMailSignature">-- <br>Jane</div><blockquote>q</blockquote>"#,
        )
        .unwrap();

        let ops = place_above_new_signature(&doc, &Config::default()).unwrap();
        assert_eq!(ops.len(), 3);
        let selected = match &ops[0] {
            CursorCommand::SetSelection(CursorAnchor::SelectNode(node)) => node.clone(),
            other => panic!("unexpected first op: {:?}", other),
        };
        assert_eq!(selected.attribute("id").as_deref(), Some(NEW_SIGNATURE_ID));
        assert_eq!(ops[1], CursorCommand::MoveUp);
        assert_eq!(ops[2], CursorCommand::InsertParagraphBreak);
    }

    #[test]
    fn test_no_paragraph_break_when_configured() {
        let doc =
            Document::parse(r#"<div id="AppleMailSignature">sig</div>"#).unwrap();
        let config = Config {
            no_whitespace_below_quote: true,
            ..Config::default()
        };

        let ops = place_above_new_signature(&doc, &config).unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[1], CursorCommand::MoveUp);
    }

    #[test]
    fn test_missing_signature_is_a_normal_outcome() {
        let doc = Document::parse("<div>no signature here</div>").unwrap();
        assert!(place_above_new_signature(&doc, &Config::default()).is_none());
    }
}
