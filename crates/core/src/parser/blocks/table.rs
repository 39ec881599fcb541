// crates/core/src/parser/blocks/table.rs
//! Pipe tables (extended flavour only).
//!
//! ```text
//! | Name | Size |
//! |:-----|-----:|
//! | a    |    1 |
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::{Alignment, Block, Row, Text};
use crate::parser::block_parser::{BlockParser, Parsed};
use crate::parser::document::DocumentParser;
use crate::parser::util::skip_whitespace;

/// テーブルパーサ
#[derive(Debug, Clone, Copy, Default)]
pub struct TableParser;

impl BlockParser for TableParser {
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
        if !doc.short_line_indent() || find_pipe(doc.content()).is_none() {
            return None;
        }
        doc.attempt(try_parse).map(Parsed::Block)
    }
}

fn try_parse(doc: &mut DocumentParser<'_>) -> Option<Block> {
    let header = parse_row(doc)?;
    doc.read_next_line();
    if !doc.continues_container() {
        return None;
    }
    let delimiter_row = parse_row(doc)?;
    if delimiter_row.len() != header.len() {
        return None;
    }
    let alignments = delimiter_row
        .iter()
        .map(|cell| parse_alignment(cell))
        .collect::<Option<Vec<_>>>()?;
    doc.read_next_line();

    let mut rows = Vec::new();
    while doc.continues_container() {
        let Some(mut row) = parse_row(doc) else {
            break;
        };
        row.resize(header.len(), String::new());
        rows.push(into_row(row));
        doc.read_next_line();
    }
    log::trace!("table with {} columns and {} rows", header.len(), rows.len());
    Some(Block::Table {
        header: into_row(header),
        alignments,
        rows,
    })
}

fn into_row(cells: Vec<String>) -> Row {
    cells.iter().map(|cell| Text::from(cell.as_str())).collect()
}

/// Position of the first unescaped `|`.
fn find_pipe(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, b) in s.bytes().enumerate() {
        if b == b'|' && !escaped {
            return Some(i);
        }
        escaped = !escaped && b == b'\\';
    }
    None
}

/// `---`, `:--`, `--:` or `:-:`.
fn parse_alignment(cell: &str) -> Option<Alignment> {
    let (alignment, dashes) = match (cell.strip_prefix(':'), cell.strip_suffix(':')) {
        (Some(inner), Some(_)) if cell.len() > 2 => (Alignment::Center, &inner[..inner.len() - 1]),
        (Some(inner), _) => (Alignment::Left, inner),
        (None, Some(inner)) => (Alignment::Right, inner),
        (None, None) => (Alignment::Undefined, cell),
    };
    (!dashes.is_empty() && dashes.bytes().all(|b| b == b'-')).then_some(alignment)
}

/// Splits the current line into trimmed cells.
///
/// A line is a row if it contains an unescaped pipe. A cell ending in a
/// backslash without a closing pipe continues on the next line.
fn parse_row(doc: &mut DocumentParser<'_>) -> Option<Vec<String>> {
    let mut index = skip_whitespace(doc.input(), doc.content_start(), doc.content_end());
    if index >= doc.content_end() {
        return None;
    }
    let mut valid = false;
    if doc.input().as_bytes()[index] == b'|' {
        valid = true;
        index = skip_whitespace(doc.input(), index + 1, doc.content_end());
    }
    let mut cells = Vec::new();
    let mut pending: Option<String> = None;
    while index < doc.content_end() {
        let rest = &doc.input()[index..doc.content_end()];
        match find_pipe(rest) {
            Some(pipe) => {
                let mut cell = pending.take().unwrap_or_default();
                cell.push_str(rest[..pipe].trim_end_matches([' ', '\t']));
                cells.push(cell);
                valid = true;
                index = skip_whitespace(doc.input(), index + pipe + 1, doc.content_end());
            }
            None => {
                let text = rest.trim_end_matches([' ', '\t']);
                if let Some(continued) = text.strip_suffix('\\') {
                    pending.get_or_insert_with(String::new).push_str(continued);
                    doc.read_next_line();
                    if doc.finished() {
                        break;
                    }
                    index = skip_whitespace(doc.input(), doc.content_start(), doc.content_end());
                } else {
                    let mut cell = pending.take().unwrap_or_default();
                    cell.push_str(text);
                    cells.push(cell);
                    break;
                }
            }
        }
    }
    (valid && !cells.is_empty()).then_some(cells)
}
