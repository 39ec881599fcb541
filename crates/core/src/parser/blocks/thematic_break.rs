// crates/core/src/parser/blocks/thematic_break.rs
use crate::ast::Block;
use crate::parser::block_parser::{BlockParser, Parsed};
use crate::parser::document::DocumentParser;

/// Three or more `-`, `_` or `*`, optionally separated by spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThematicBreakParser;

impl BlockParser for ThematicBreakParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() {
            return None;
        }
        let mut mark = None;
        let mut count = 0;
        for b in doc.content().bytes() {
            match b {
                b' ' | b'\t' => {}
                b'-' | b'_' | b'*' if mark.is_none_or(|m| m == b) => {
                    mark = Some(b);
                    count += 1;
                }
                _ => return None,
            }
        }
        if count < 3 {
            return None;
        }
        doc.read_next_line();
        Some(Parsed::Block(Block::ThematicBreak))
    }
}
