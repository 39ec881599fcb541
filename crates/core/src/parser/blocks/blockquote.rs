// crates/core/src/parser/blocks/blockquote.rs
use crate::parser::block_parser::{BlockParser, ContainerKind, Parsed};
use crate::parser::document::DocumentParser;

/// Opens a block quote container on `>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockquoteParser;

impl BlockParser for BlockquoteParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() || !doc.content().starts_with('>') {
            return None;
        }
        let mut start = doc.content_start() + 1;
        if matches!(doc.input().as_bytes().get(start), Some(b' ' | b'\t'))
            && start < doc.content_end()
        {
            start += 1;
        }
        doc.reset_line_start(start);
        Some(Parsed::Container(ContainerKind::Blockquote))
    }
}
