// crates/core/src/parser/blocks/html.rs
//! Raw HTML blocks.
//!
//! The seven start conditions of CommonMark are modelled by [`HtmlKind`];
//! each kind knows how to recognise its first line and when it ends.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::Block;
use crate::parser::block_parser::{BlockParser, Parsed};
use crate::parser::document::DocumentParser;
use crate::parser::util::{is_html_tag, is_whitespace};

const RAW_TAGS: [&str; 4] = ["script", "pre", "style", "textarea"];

const BLOCK_TAGS: [&str; 62] = [
    "address", "article", "aside", "base", "basefont", "blockquote", "body", "caption", "center",
    "col", "colgroup", "dd", "details", "dialog", "dir", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4", "h5",
    "h6", "head", "header", "hr", "html", "iframe", "legend", "li", "link", "main", "menu",
    "menuitem", "nav", "noframes", "ol", "optgroup", "option", "p", "param", "search", "section",
    "source", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr", "ul",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HtmlKind {
    Raw,
    Comment,
    ProcessingInstruction,
    Declaration,
    Cdata,
    BlockTag,
    CompleteTag,
}

impl HtmlKind {
    /// Detects the kind from the lower-cased first line.
    fn detect(line: &str, paragraph_open: bool) -> Option<Self> {
        let rest = line.strip_prefix('<')?;
        if RAW_TAGS.iter().any(|tag| tag_followed_by_boundary(rest, tag)) {
            return Some(Self::Raw);
        }
        if rest.starts_with("!--") {
            return Some(Self::Comment);
        }
        if rest.starts_with('?') {
            return Some(Self::ProcessingInstruction);
        }
        if rest.starts_with("![cdata[") {
            return Some(Self::Cdata);
        }
        if rest
            .strip_prefix('!')
            .and_then(|r| r.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic())
        {
            return Some(Self::Declaration);
        }
        let name = rest.strip_prefix('/').unwrap_or(rest);
        if BLOCK_TAGS.iter().any(|tag| {
            tag_followed_by_boundary(name, tag)
                || name.strip_prefix(tag).is_some_and(|r| r.starts_with("/>"))
        }) {
            return Some(Self::BlockTag);
        }
        if !paragraph_open && is_complete_tag(rest) {
            return Some(Self::CompleteTag);
        }
        None
    }

    const fn ends_at_blank_line(self) -> bool {
        matches!(self, Self::BlockTag | Self::CompleteTag)
    }

    /// Whether the lower-cased `line` contains the end condition.
    fn ends(self, line: &str) -> bool {
        match self {
            Self::Raw => line.match_indices("</").any(|(i, _)| {
                let after = &line[i + 2..];
                RAW_TAGS
                    .iter()
                    .any(|tag| after.strip_prefix(tag).is_some_and(|r| r.starts_with('>')))
            }),
            Self::Comment => line.contains("-->"),
            Self::ProcessingInstruction => line.contains("?>"),
            Self::Declaration => line.contains('>'),
            Self::Cdata => line.contains("]]>"),
            Self::BlockTag | Self::CompleteTag => false,
        }
    }
}

fn tag_followed_by_boundary(rest: &str, tag: &str) -> bool {
    rest.strip_prefix(tag).is_some_and(|after| {
        after
            .chars()
            .next()
            .is_none_or(|c| c == '>' || is_whitespace(c))
    })
}

/// A single open or closing tag followed only by whitespace.
fn is_complete_tag(rest: &str) -> bool {
    let Some(close) = rest.find('>') else {
        return false;
    };
    let tag = &rest[..close];
    let name = tag.strip_prefix('/').unwrap_or(tag);
    !RAW_TAGS.iter().any(|raw| tag_followed_by_boundary(name, raw) || name == *raw)
        && is_html_tag(tag)
        && rest[close + 1..].chars().all(is_whitespace)
}

/// HTML ブロックパーサ
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBlockParser;

impl BlockParser for HtmlBlockParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() || !doc.content().starts_with('<') {
            return None;
        }
        let first: String = doc.content().to_lowercase();
        let kind = HtmlKind::detect(&first, doc.has_paragraph())?;
        let mut lines: Vec<String> = alloc::vec![doc.line().into()];
        let mut closed = kind.ends(&first);
        doc.read_next_line();
        while !closed && doc.continues_container() {
            if doc.line_empty() && kind.ends_at_blank_line() {
                break;
            }
            lines.push(doc.line().into());
            closed = kind.ends(&doc.content().to_lowercase());
            doc.read_next_line();
        }
        Some(Parsed::Block(Block::HtmlBlock(lines)))
    }
}
