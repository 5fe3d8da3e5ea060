//! End-to-end scenarios over the full pipeline
//!
//! These drive a whole compose-body normalization the way the host would:
//! - mobile-signature removal inside the quoted block
//! - full quote pruning with nested quotes
//! - cursor command ordering across stages
//! - the structural no-op path when nothing applies

use quotefix_dom::Document;
use quotefix_engine::{
    Config, CursorAnchor, CursorCommand, MessageKind, Pipeline, SignatureMatcher,
    DEFAULT_SIGNATURE_PATTERN,
};

fn default_matcher() -> SignatureMatcher {
    SignatureMatcher::new(DEFAULT_SIGNATURE_PATTERN).unwrap()
}

#[test]
fn test_mobile_signature_removed_from_quoted_block() {
    let doc = Document::parse(
        "<div>Hi</div><br>\
         <blockquote>\
         <div>On Jan 1, 2026, Jane wrote:</div>\
         <div>original text</div>\
         <div>Sent from my iPhone</div>\
         <div>leftover from the quote</div>\
         </blockquote>",
    )
    .unwrap();
    let matcher = SignatureMatcher::new("Sent from my iPhone").unwrap();
    let config = Config {
        remove_quotes: false,
        keep_sender_signature: false,
        ..Config::default()
    };

    let result = Pipeline::new(config, matcher)
        .run(&doc, MessageKind::Reply)
        .unwrap();

    assert!(result.mutated);
    // the signature div and everything after it are gone; the quote itself
    // and the content before the signature survive
    let blockquote = doc.first_descendant_blockquote().unwrap();
    assert_eq!(
        blockquote.inner_html(),
        "<div>On Jan 1, 2026, Jane wrote:</div><div>original text</div>"
    );
    // attribution-whitespace cleanup collapsed the br before the quote
    assert_eq!(
        doc.body().unwrap().inner_html(),
        "<div>Hi</div>\
         <blockquote><div>On Jan 1, 2026, Jane wrote:</div><div>original text</div></blockquote>"
    );
    assert!(result.cursor_ops.contains(&CursorCommand::MoveDown));
    assert!(result
        .cursor_ops
        .contains(&CursorCommand::InsertParagraphBreak));
}

#[test]
fn test_content_below_the_quote_is_never_touched() {
    let doc = Document::parse(
        "<div>reply</div>\
         <blockquote><div>quoted</div><div>-- </div><div>sig body</div></blockquote>\
         <div>below the quote</div>",
    )
    .unwrap();

    let result = Pipeline::new(Config::default(), default_matcher())
        .run(&doc, MessageKind::Reply)
        .unwrap();

    assert!(result.mutated);
    assert_eq!(
        doc.body().unwrap().inner_html(),
        "<div>reply</div>\
         <blockquote><div>quoted</div></blockquote>\
         <div>below the quote</div>"
    );
}

#[test]
fn test_nested_quotes_fully_pruned() {
    let doc = Document::parse(
        "<div>reply</div>\
         <blockquote>level one<blockquote>level two</blockquote></blockquote>",
    )
    .unwrap();
    let config = Config {
        remove_quotes: true,
        remove_quotes_level: 1,
        ..Config::default()
    };

    let result = Pipeline::new(config, default_matcher())
        .run(&doc, MessageKind::Reply)
        .unwrap();

    assert!(result.mutated);
    assert!(doc.query_selector_all("blockquote").is_empty());
    assert_eq!(doc.body().unwrap().inner_html(), "<div>reply</div>");
}

#[test]
fn test_pruning_keeps_quotes_below_the_threshold() {
    let doc = Document::parse(
        "<blockquote>keep<blockquote>drop</blockquote></blockquote>",
    )
    .unwrap();
    let config = Config {
        remove_quotes: true,
        remove_quotes_level: 2,
        // isolate the pruner from the other stages
        keep_sender_signature: true,
        keep_leading_whitespace: true,
        keep_attribution_whitespace: true,
        ..Config::default()
    };

    let result = Pipeline::new(config, default_matcher())
        .run(&doc, MessageKind::Reply)
        .unwrap();

    assert!(result.mutated);
    let quotes = doc.query_selector_all("blockquote");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].inner_html(), "keep");
}

#[test]
fn test_cursor_command_order_across_stages() {
    let doc = Document::parse(
        "<div>Hi</div>\
         <div id=\"AppleMailSignature\">--&nbsp;<br>Me</div>\
         <blockquote><div>quoted text</div><br>-- <br>Jane</blockquote>",
    )
    .unwrap();
    let own_signature = doc.get_element_by_id("AppleMailSignature").unwrap();

    let result = Pipeline::new(Config::default(), default_matcher())
        .run(&doc, MessageKind::Reply)
        .unwrap();

    assert_eq!(
        result.cursor_ops,
        vec![
            CursorCommand::MoveToEnd,
            CursorCommand::MoveDown,
            CursorCommand::InsertParagraphBreak,
            CursorCommand::SetSelection(CursorAnchor::SelectNode(own_signature)),
            CursorCommand::MoveUp,
            CursorCommand::InsertParagraphBreak,
            CursorCommand::MoveToBeginningOfLine,
        ]
    );
    // the quoted signature is gone, the user's own block is not
    let blockquote = doc.first_descendant_blockquote().unwrap();
    assert_eq!(blockquote.inner_html(), "<div>quoted text</div>");
    assert!(doc.get_element_by_id("AppleMailSignature").is_some());
}

#[test]
fn test_structural_noop_when_nothing_applies() {
    let doc = Document::parse("<div>fresh</div><br><blockquote>quoted<br></blockquote>").unwrap();
    let before = doc.root().outer_html();
    let config = Config {
        keep_leading_whitespace: true,
        keep_attribution_whitespace: true,
        remove_trailing_whitespace: false,
        ..Config::default()
    };

    let result = Pipeline::new(config, default_matcher())
        .run(&doc, MessageKind::Reply)
        .unwrap();

    assert!(!result.mutated);
    assert_eq!(doc.root().outer_html(), before);
    assert_eq!(
        result.cursor_ops,
        vec![
            CursorCommand::MoveToEnd,
            CursorCommand::InsertNewline,
            CursorCommand::MoveToBeginningOfLine,
        ]
    );
}
