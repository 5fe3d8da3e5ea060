//! # Fragment Parser
//!
//! Minimal, tolerant HTML fragment parser.
//!
//! This is not a spec-grade HTML parser and does not try to be one: the
//! pipeline receives trees the host already parsed. It exists to back
//! `set_inner_html` and to let tests build documents from markup the way the
//! host parser would. It handles the subset the compose editor emits:
//! elements with attributes, text with character entities, void elements,
//! comments, and sloppy close tags (which it recovers from instead of
//! rejecting).

use crate::error::{ParseError, ParseResult};
use crate::node::NodeRef;
use crate::serializer::is_void_element;

/// Parse markup into a list of sibling nodes.
pub fn parse_fragment(input: &str) -> ParseResult<Vec<NodeRef>> {
    let mut parser = Parser { input, pos: 0 };
    parser.parse_nodes(None)
}

struct Parser<'src> {
    input: &'src str,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn rest(&self) -> &'src str {
        let input: &'src str = self.input;
        &input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    /// Advance by a byte count known to land on a char boundary.
    fn eat(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.input.len());
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
        let input: &'src str = self.input;
        &input[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Parse siblings until EOF or until the close tag of `enclosing`.
    ///
    /// A close tag that matches neither `enclosing` nor the top level makes
    /// the current element close implicitly, leaving the tag for an ancestor
    /// to consume; at the top level stray close tags are dropped.
    fn parse_nodes(&mut self, enclosing: Option<&str>) -> ParseResult<Vec<NodeRef>> {
        let mut nodes = Vec::new();
        while !self.at_end() {
            let rest = self.rest();
            if rest.starts_with("</") {
                let (name, len) = self.scan_close_tag();
                match enclosing {
                    Some(open) if open == name => {
                        self.eat(len);
                        break;
                    }
                    Some(_) => break,
                    None => self.eat(len),
                }
            } else if rest.starts_with("<!--") {
                self.skip_comment();
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_past_byte(b'>');
            } else if self.element_ahead() {
                nodes.push(self.parse_element()?);
            } else {
                let text = self.parse_text();
                if !text.is_empty() {
                    nodes.push(NodeRef::text_node(text));
                }
            }
        }
        Ok(nodes)
    }

    fn parse_element(&mut self) -> ParseResult<NodeRef> {
        self.eat(1); // '<'
        let name = self
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '-')
            .to_ascii_lowercase();
        let element = NodeRef::element(&name);
        let self_closing = self.parse_attributes(&element)?;
        if self_closing || is_void_element(&name) {
            return Ok(element);
        }
        for child in self.parse_nodes(Some(&name))? {
            element.append_unchecked(&child);
        }
        Ok(element)
    }

    /// Returns whether the tag was self-closing.
    fn parse_attributes(&mut self, element: &NodeRef) -> ParseResult<bool> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::UnexpectedEof { context: "tag" }),
                Some('>') => {
                    self.eat(1);
                    return Ok(false);
                }
                Some('/') => {
                    self.eat(1);
                    self.skip_whitespace();
                    if self.peek() == Some('>') {
                        self.eat(1);
                        return Ok(true);
                    }
                    // lone slash, ignore
                }
                Some(_) => {
                    let name = self
                        .eat_while(|c| !c.is_whitespace() && c != '=' && c != '>' && c != '/');
                    if name.is_empty() {
                        self.advance();
                        continue;
                    }
                    let name = name.to_ascii_lowercase();
                    self.skip_whitespace();
                    let value = if self.peek() == Some('=') {
                        self.eat(1);
                        self.skip_whitespace();
                        self.parse_attribute_value()?
                    } else {
                        String::new()
                    };
                    element.set_attribute(name, value);
                }
            }
        }
    }

    fn parse_attribute_value(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.eat(1);
                let raw = self.eat_while(|c| c != quote);
                if self.at_end() {
                    return Err(ParseError::UnexpectedEof {
                        context: "attribute value",
                    });
                }
                self.eat(1);
                Ok(decode_entities(raw))
            }
            _ => Ok(decode_entities(
                self.eat_while(|c| !c.is_whitespace() && c != '>'),
            )),
        }
    }

    fn parse_text(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch == '<' && self.markup_ahead() {
                break;
            }
            self.advance();
        }
        decode_entities(&self.input[start..self.pos])
    }

    fn element_ahead(&self) -> bool {
        let mut chars = self.rest().chars();
        chars.next() == Some('<') && chars.next().map_or(false, |c| c.is_ascii_alphabetic())
    }

    fn markup_ahead(&self) -> bool {
        let mut chars = self.rest().chars();
        if chars.next() != Some('<') {
            return false;
        }
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?')
    }

    /// Close-tag name and total byte length, without consuming.
    fn scan_close_tag(&self) -> (String, usize) {
        let rest = self.rest();
        let name: String = rest[2..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let len = match rest.find('>') {
            Some(end) => end + 1,
            None => rest.len(),
        };
        (name, len)
    }

    fn skip_comment(&mut self) {
        match self.rest().find("-->") {
            Some(end) => self.eat(end + 3),
            None => self.pos = self.input.len(),
        }
    }

    fn skip_past_byte(&mut self, target: u8) {
        match self.rest().bytes().position(|b| b == target) {
            Some(end) => self.eat(end + 1),
            None => self.pos = self.input.len(),
        }
    }
}

/// Decode the character entities the compose editor emits. Unknown entities
/// are kept literally.
pub(crate) fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        // an entity name is short; anything longer is literal text
        match rest[1..].find(';').map(|i| i + 1).filter(|&end| end <= 12) {
            Some(end) => {
                match decode_entity(&rest[1..end]) {
                    Some(ch) => out.push(ch),
                    None => out.push_str(&rest[..=end]),
                }
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => return Some('&'),
        "lt" => return Some('<'),
        "gt" => return Some('>'),
        "quot" => return Some('"'),
        "apos" => return Some('\''),
        "nbsp" => return Some('\u{a0}'),
        _ => {}
    }
    let code = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let nodes = parse_fragment("<div>Hi</div><blockquote><div>quoted</div></blockquote>")
            .unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].tag(), Some("div"));
        assert_eq!(nodes[0].children()[0].text(), Some("Hi"));
        assert_eq!(nodes[1].tag(), Some("blockquote"));
        let inner = &nodes[1].children()[0];
        assert_eq!(inner.tag(), Some("div"));
        assert_eq!(inner.parent().as_ref(), Some(&nodes[1]));
    }

    #[test]
    fn test_parse_attributes() {
        let nodes =
            parse_fragment(r#"<div id="AppleMailSignature" class='sig' hidden>x</div>"#).unwrap();
        let div = &nodes[0];
        assert_eq!(div.attribute("id").as_deref(), Some("AppleMailSignature"));
        assert_eq!(div.attribute("class").as_deref(), Some("sig"));
        assert_eq!(div.attribute("hidden").as_deref(), Some(""));
    }

    #[test]
    fn test_void_and_self_closing_elements() {
        let nodes = parse_fragment("<br>text<br/><img src=x>more").unwrap();
        let kinds: Vec<Option<&str>> = nodes.iter().map(|n| n.tag()).collect();
        assert_eq!(kinds, [Some("br"), None, Some("br"), Some("img"), None]);
        assert!(nodes[0].children().is_empty());
    }

    #[test]
    fn test_entities_decoded() {
        let nodes = parse_fragment("a &amp; b&nbsp;&lt;c&gt; &#65;&#x42; &bogus; &").unwrap();
        assert_eq!(
            nodes[0].text(),
            Some("a & b\u{a0}<c> AB &bogus; &")
        );
    }

    #[test]
    fn test_comments_and_doctype_skipped() {
        let nodes = parse_fragment("<!DOCTYPE html><!-- note --><div>x</div>").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag(), Some("div"));
    }

    #[test]
    fn test_mismatched_close_recovers() {
        // the span closes implicitly when the div close appears
        let nodes = parse_fragment("<div><span>inner</div>after").unwrap();
        assert_eq!(nodes.len(), 2);
        let span = &nodes[0].children()[0];
        assert_eq!(span.tag(), Some("span"));
        assert_eq!(nodes[1].text(), Some("after"));
    }

    #[test]
    fn test_stray_close_dropped_at_top_level() {
        let nodes = parse_fragment("</div><div>x</div>").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag(), Some("div"));
    }

    #[test]
    fn test_unterminated_tag_is_an_error() {
        assert!(matches!(
            parse_fragment("<div id=\"x"),
            Err(ParseError::UnexpectedEof {
                context: "attribute value"
            })
        ));
    }

    #[test]
    fn test_lone_angle_bracket_is_text() {
        let nodes = parse_fragment("1 < 2 and 3 > 2").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text(), Some("1 < 2 and 3 > 2"));
    }
}
