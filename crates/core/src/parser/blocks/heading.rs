// crates/core/src/parser/blocks/heading.rs
//! ATX (`# Title`) and setext (`Title\n=====`) headings.

use crate::ast::{Block, Text};
use crate::parser::block_parser::{BlockParser, Parsed};
use crate::parser::document::DocumentParser;

/// `#` から `######` までの見出し
#[derive(Debug, Clone, Copy, Default)]
pub struct AtxHeadingParser;

impl BlockParser for AtxHeadingParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() {
            return None;
        }
        let content = doc.content();
        let level = content.bytes().take_while(|&b| b == b'#').count();
        if !(1..=6).contains(&level) {
            return None;
        }
        let rest = &content[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        let mut title = rest.trim_matches([' ', '\t']);
        let unclosed = title.trim_end_matches('#');
        if unclosed.len() != title.len() && (unclosed.is_empty() || unclosed.ends_with([' ', '\t']))
        {
            title = unclosed.trim_end_matches([' ', '\t']);
        }
        let level = u8::try_from(level).ok()?;
        doc.read_next_line();
        Some(Parsed::Block(Block::Heading {
            level,
            text: Text::from(title),
        }))
    }
}

/// 直前の段落を `=` / `-` の下線で見出しに変換する
#[derive(Debug, Clone, Copy, Default)]
pub struct SetextHeadingParser;

impl BlockParser for SetextHeadingParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() || doc.lazy_continuation() || !doc.has_paragraph() {
            return None;
        }
        let underline = doc.content().trim_end_matches([' ', '\t']);
        let level = match underline.as_bytes().first() {
            Some(b'=') => 1,
            Some(b'-') => 2,
            _ => return None,
        };
        let mark = underline.as_bytes()[0];
        if !underline.bytes().all(|b| b == mark) {
            return None;
        }
        let text = doc.take_paragraph()?;
        doc.read_next_line();
        Some(Parsed::Block(Block::Heading {
            level,
            text: text.finalized(),
        }))
    }
}
