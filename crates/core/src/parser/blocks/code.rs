// crates/core/src/parser/blocks/code.rs
//! Indented and fenced code blocks.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::ast::Block;
use crate::parser::block_parser::{BlockParser, Parsed};
use crate::parser::document::DocumentParser;

const CODE_INDENT: usize = 4;

/// Lines indented by four or more columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentedCodeBlockParser;

impl BlockParser for IndentedCodeBlockParser {
    fn may_interrupt_paragraph(&self) -> bool {
        false
    }

    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if doc.short_line_indent() {
            return None;
        }
        let mut code = alloc::vec![doc.format_indented_line(CODE_INDENT)];
        let mut blank = Vec::new();
        doc.read_next_line();
        while doc.continues_container() && (doc.line_empty() || !doc.short_line_indent()) {
            if doc.line_empty() {
                blank.push(doc.format_indented_line(CODE_INDENT));
            } else {
                code.append(&mut blank);
                code.push(doc.format_indented_line(CODE_INDENT));
            }
            doc.read_next_line();
        }
        Some(Parsed::Block(Block::IndentedCode(code)))
    }
}

/// Code between ```` ``` ```` or `~~~` fences.
#[derive(Debug, Clone, Copy, Default)]
pub struct FencedCodeBlockParser;

impl FencedCodeBlockParser {
    fn is_closing_fence(doc: &DocumentParser<'_>, fence: u8, length: usize) -> bool {
        if doc.line_empty() || !doc.short_line_indent() {
            return false;
        }
        let content = doc.content();
        let run = content.bytes().take_while(|&b| b == fence).count();
        run >= length && content[run..].trim_matches([' ', '\t']).is_empty()
    }
}

impl BlockParser for FencedCodeBlockParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() {
            return None;
        }
        let content = doc.content();
        let fence = *content.as_bytes().first()?;
        if fence != b'`' && fence != b'~' {
            return None;
        }
        let length = content.bytes().take_while(|&b| b == fence).count();
        if length < 3 {
            return None;
        }
        let info = content[length..].trim();
        if fence == b'`' && info.contains('`') {
            return None;
        }
        let info = (!info.is_empty()).then(|| info.to_string());
        let fence_indent = doc.indent();
        doc.read_next_line();
        let mut lines = Vec::new();
        while doc.continues_container() {
            if Self::is_closing_fence(doc, fence, length) {
                doc.read_next_line();
                break;
            }
            lines.push(doc.format_indented_line(fence_indent));
            doc.read_next_line();
        }
        Some(Parsed::Block(Block::FencedCode { info, lines }))
    }
}
