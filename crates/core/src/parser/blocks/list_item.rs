// crates/core/src/parser/blocks/list_item.rs
//! Bullet and ordered list items.
//!
//! A list item is a container: the parser only recognises the marker and
//! hands the rest of the line back to the document parser. Items are grouped
//! into lists when their container closes (see [`bundle`](crate::parser::bundle)).

use alloc::vec::Vec;

use crate::ast::ListType;
use crate::parser::block_parser::{BlockParser, ContainerKind, Parsed};
use crate::parser::document::DocumentParser;

const MAX_ORDERED_DIGITS: usize = 9;

/// リスト項目パーサ
#[derive(Debug, Clone)]
pub struct ListItemParser {
    bullets: Vec<char>,
}

impl Default for ListItemParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ListItemParser {
    /// Recognises `-`, `+` and `*` bullets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bullets(['-', '+', '*'])
    }

    /// Additionally recognises `:` which introduces a definition description.
    #[must_use]
    pub fn extended() -> Self {
        Self::with_bullets(['-', '+', '*', ':'])
    }

    #[must_use]
    pub fn with_bullets(bullets: impl IntoIterator<Item = char>) -> Self {
        Self {
            bullets: bullets.into_iter().collect(),
        }
    }

    fn marker(&self, content: &str) -> Option<(ListType, usize)> {
        let first = content.chars().next()?;
        if self.bullets.contains(&first) {
            return Some((ListType::Bullet(first), first.len_utf8()));
        }
        let digits = content.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > MAX_ORDERED_DIGITS {
            return None;
        }
        let delimiter = match content.as_bytes().get(digits) {
            Some(b'.') => '.',
            Some(b')') => ')',
            _ => return None,
        };
        let number = content[..digits].parse().ok()?;
        Some((ListType::Ordered(number, delimiter), digits + 1))
    }
}

impl BlockParser for ListItemParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() {
            return None;
        }
        let (kind, marker_len) = self.marker(doc.content())?;
        let bytes = doc.input().as_bytes();
        let after_marker = doc.content_start() + marker_len;
        let end = doc.content_end();

        let mut pos = after_marker;
        let mut spaces = 0;
        while pos < end {
            match bytes[pos] {
                b' ' => spaces += 1,
                b'\t' => spaces += 4,
                _ => break,
            }
            pos += 1;
        }
        let empty = pos == end;
        if spaces == 0 && !empty {
            return None;
        }
        // Only a paragraph in the same container is interrupted; a lazy
        // line may still start a sibling item of an enclosing list.
        if doc.has_paragraph()
            && !doc.lazy_continuation()
            && (empty || kind.start_number().is_some_and(|n| n != 1))
        {
            return None;
        }

        let marker_indent = doc.indent() + marker_len;
        let (indent, start) = if empty {
            (marker_indent + 1, end)
        } else if spaces > 4 {
            // Content indented further than that is an indented code block.
            (marker_indent + 1, after_marker + 1)
        } else {
            (marker_indent + spaces, pos)
        };
        doc.reset_line_start(start);
        Some(Parsed::Container(ContainerKind::ListItem { kind, indent }))
    }
}
