// crates/core/src/parser/blocks/link_ref.rs
//! Link reference definitions: `[label]: destination "title"`.
//!
//! Definitions may span several lines, so the parser reads ahead and relies
//! on [`DocumentParser::attempt`] to rewind when the lines turn out to be an
//! ordinary paragraph.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::ast::{Block, Lines};
use crate::parser::block_parser::{BlockParser, Parsed};
use crate::parser::document::DocumentParser;
use crate::parser::util::{is_whitespace, skip_whitespace};

const MAX_LABEL_LENGTH: usize = 999;

/// リンク参照定義パーサ
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkRefDefinitionParser;

impl BlockParser for LinkRefDefinitionParser {
    fn may_interrupt_paragraph(&self) -> bool {
        false
    }

    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() || !doc.content().starts_with('[') {
            return None;
        }
        doc.attempt(try_parse).map(Parsed::Block)
    }
}

fn try_parse(doc: &mut DocumentParser<'_>) -> Option<Block> {
    let mut index = doc.content_start();
    let label = parse_label(doc, &mut index)?;
    if byte_at(doc, index) != Some(b':') {
        return None;
    }
    index += 1;
    skip_space(doc, &mut index)?;
    let destination = parse_destination(doc, &mut index)?;
    if index < doc.content_end() && !is_whitespace(char::from(doc.input().as_bytes()[index])) {
        return None;
    }

    let before_title = doc.snapshot();
    let definition = |title: Lines| Block::ReferenceDef {
        label: label.clone(),
        destination: destination.clone(),
        title,
    };
    let Some(on_new_line) = skip_space(doc, &mut index) else {
        // Nothing follows on this line or the next; the definition ends here.
        return Some(definition(Vec::new()));
    };
    let closing = match byte_at(doc, index) {
        Some(b'"') => b'"',
        Some(b'\'') => b'\'',
        Some(b'(') => b')',
        _ if on_new_line => return Some(definition(Vec::new())),
        _ => return None,
    };
    match parse_multi_line(doc, &mut index, closing, true) {
        Some(title) => {
            doc.read_next_line();
            Some(definition(title))
        }
        None if on_new_line => {
            doc.restore(before_title);
            doc.read_next_line();
            Some(definition(Vec::new()))
        }
        None => None,
    }
}

fn byte_at(doc: &DocumentParser<'_>, index: usize) -> Option<u8> {
    (index < doc.content_end()).then(|| doc.input().as_bytes()[index])
}

/// Skips whitespace, moving to the next line if the current one is exhausted.
///
/// Returns whether a line break was crossed, or `None` if no content follows.
fn skip_space(doc: &mut DocumentParser<'_>, index: &mut usize) -> Option<bool> {
    *index = skip_whitespace(doc.input(), *index, doc.content_end());
    if *index < doc.content_end() {
        return Some(false);
    }
    doc.read_next_line();
    if doc.finished() || doc.line_empty() {
        return None;
    }
    *index = skip_whitespace(doc.input(), doc.content_start(), doc.content_end());
    (*index < doc.content_end()).then_some(true)
}

fn parse_label(doc: &mut DocumentParser<'_>, index: &mut usize) -> Option<String> {
    let lines = parse_multi_line(doc, index, b']', false)?;
    let mut label = String::new();
    for word in lines.iter().flat_map(|line| line.split([' ', '\t'])) {
        if word.is_empty() {
            continue;
        }
        if !label.is_empty() {
            label.push(' ');
        }
        label.push_str(word);
    }
    let length = label.chars().count();
    (length > 0 && length <= MAX_LABEL_LENGTH).then_some(label)
}

fn parse_destination(doc: &DocumentParser<'_>, index: &mut usize) -> Option<String> {
    let input = doc.input();
    let bytes = input.as_bytes();
    let end = doc.content_end();
    if bytes[*index] == b'<' {
        *index += 1;
        let start = *index;
        let mut escaped = false;
        while *index < end && (escaped || bytes[*index] != b'>') {
            if !escaped && bytes[*index] == b'<' {
                return None;
            }
            escaped = !escaped && bytes[*index] == b'\\';
            *index += 1;
        }
        if *index >= end {
            return None;
        }
        let destination = input[start..*index].to_string();
        *index += 1;
        Some(destination)
    } else {
        let start = *index;
        while *index < end && bytes[*index] > b' ' {
            *index += 1;
        }
        let destination = &input[start..*index];
        balanced(destination).then(|| destination.to_string())
    }
}

/// Unescaped parentheses in a bare destination must balance.
#[must_use]
pub fn balanced(s: &str) -> bool {
    let mut open = 0usize;
    let mut escaped = false;
    for b in s.bytes() {
        match b {
            b'(' if !escaped => open += 1,
            b')' if !escaped => match open.checked_sub(1) {
                Some(n) => open = n,
                None => return false,
            },
            _ => {}
        }
        escaped = !escaped && b == b'\\';
    }
    open == 0
}

/// Reads text up to an unescaped `closing` byte, possibly across lines.
///
/// `index` points at the opening delimiter. With `trailing_whitespace_only`
/// nothing but whitespace may follow the closing delimiter on its line.
fn parse_multi_line(
    doc: &mut DocumentParser<'_>,
    index: &mut usize,
    closing: u8,
    trailing_whitespace_only: bool,
) -> Option<Lines> {
    let opening = doc.input().as_bytes()[*index];
    *index += 1;
    let mut start = *index;
    let mut escaped = false;
    let mut lines = Vec::new();
    while !doc.finished() && !doc.line_empty() {
        let input = doc.input();
        let bytes = input.as_bytes();
        let end = doc.content_end();
        while *index < end && (escaped || bytes[*index] != closing) {
            if !escaped && bytes[*index] == opening {
                return None;
            }
            escaped = !escaped && bytes[*index] == b'\\';
            *index += 1;
        }
        if *index < end {
            lines.push(input[start..*index].to_string());
            *index += 1;
            if trailing_whitespace_only {
                *index = skip_whitespace(input, *index, end);
                if *index < end {
                    return None;
                }
            }
            return Some(lines);
        }
        lines.push(input[start..end].to_string());
        doc.read_next_line();
        *index = doc.content_start();
        start = *index;
        escaped = false;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_parentheses() {
        assert!(balanced("a(b)c"));
        assert!(balanced("a\\(b"));
        assert!(!balanced("a(b"));
        assert!(!balanced("a)b("));
    }
}
