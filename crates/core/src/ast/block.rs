// crates/core/src/ast/block.rs
//! Block-level nodes of a Markdown document.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use super::text::Text;

pub type Blocks = Vec<Block>;
/// Source lines of code and HTML blocks, each with its line terminator.
pub type Lines = Vec<String>;
pub type Row = Vec<Text>;

/// Marker of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListType {
    /// Bullet character: `-`, `+`, `*` (or `:` in definition lists).
    Bullet(char),
    /// Start number and delimiter (`.` or `)`).
    Ordered(u32, char),
}

impl ListType {
    /// Items with compatible markers belong to the same list.
    #[must_use]
    pub const fn compatible(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bullet(a), Self::Bullet(b)) | (Self::Ordered(_, a), Self::Ordered(_, b)) => {
                *a == *b
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn start_number(&self) -> Option<u32> {
        match self {
            Self::Bullet(_) => None,
            Self::Ordered(n, _) => Some(*n),
        }
    }
}

/// Column alignment of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Undefined,
    Left,
    Right,
    Center,
}

/// A term of a definition list with its `:` descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub item: Text,
    /// `ListItem` blocks using the `:` bullet.
    pub descriptions: Blocks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Document(Blocks),
    Blockquote(Blocks),
    List {
        start: Option<u32>,
        tight: bool,
        items: Blocks,
    },
    ListItem {
        kind: ListType,
        tight: bool,
        blocks: Blocks,
    },
    Paragraph(Text),
    Heading {
        level: u8,
        text: Text,
    },
    IndentedCode(Lines),
    FencedCode {
        info: Option<String>,
        lines: Lines,
    },
    HtmlBlock(Lines),
    ReferenceDef {
        label: String,
        destination: String,
        title: Lines,
    },
    ThematicBreak,
    Table {
        header: Row,
        alignments: Vec<Alignment>,
        rows: Vec<Row>,
    },
    DefinitionList(Vec<Definition>),
}

impl Block {
    /// Child blocks of container nodes.
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        match self {
            Self::Document(blocks)
            | Self::Blockquote(blocks)
            | Self::List { items: blocks, .. }
            | Self::ListItem { blocks, .. } => Some(blocks),
            _ => None,
        }
    }

    /// Readable text of the block without any markup.
    ///
    /// Children of containers are separated by newlines; code and HTML lines
    /// are kept verbatim. Reference definitions contribute nothing.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Document(blocks)
            | Self::Blockquote(blocks)
            | Self::List { items: blocks, .. }
            | Self::ListItem { blocks, .. } => plain_text_of(blocks),
            Self::Paragraph(text) | Self::Heading { text, .. } => text.raw_string(),
            Self::IndentedCode(lines)
            | Self::FencedCode { lines, .. }
            | Self::HtmlBlock(lines) => lines.concat(),
            Self::ReferenceDef { .. } | Self::ThematicBreak => String::new(),
            Self::Table { header, rows, .. } => {
                let mut lines = Vec::with_capacity(rows.len() + 1);
                lines.push(row_text(header));
                lines.extend(rows.iter().map(|row| row_text(row)));
                lines.join("\n")
            }
            Self::DefinitionList(defs) => defs
                .iter()
                .map(|def| {
                    let mut s = def.item.raw_string();
                    for desc in &def.descriptions {
                        s.push('\n');
                        s.push_str(&desc.plain_text());
                    }
                    s
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn plain_text_of(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| !matches!(b, Block::ReferenceDef { .. }))
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn row_text(row: &[Text]) -> String {
    row.iter()
        .map(Text::raw_string)
        .collect::<Vec<_>>()
        .join("\t")
}

/// The text of `blocks` if they consist of exactly one paragraph.
#[must_use]
pub fn single_paragraph(blocks: &[Block]) -> Option<&Text> {
    match blocks {
        [Block::Paragraph(text)] => Some(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_list_types() {
        assert!(ListType::Bullet('-').compatible(&ListType::Bullet('-')));
        assert!(!ListType::Bullet('-').compatible(&ListType::Bullet('*')));
        assert!(ListType::Ordered(1, '.').compatible(&ListType::Ordered(7, '.')));
        assert!(!ListType::Ordered(1, '.').compatible(&ListType::Ordered(1, ')')));
        assert!(!ListType::Bullet('.').compatible(&ListType::Ordered(1, '.')));
    }

    #[test]
    fn start_number_only_for_ordered() {
        assert_eq!(ListType::Bullet('+').start_number(), None);
        assert_eq!(ListType::Ordered(3, ')').start_number(), Some(3));
    }

    #[test]
    fn plain_text_joins_children() {
        let doc = Block::Document(vec![
            Block::Heading {
                level: 1,
                text: Text::from("Title"),
            },
            Block::IndentedCode(vec!["  foo\n".into(), "bar\n".into()]),
            Block::Paragraph(Text::from("two")),
        ]);
        assert_eq!(doc.plain_text(), "Title\n  foo\nbar\n\ntwo");
    }

    #[test]
    fn single_paragraph_detection() {
        let blocks = vec![Block::Paragraph(Text::from("x"))];
        assert!(single_paragraph(&blocks).is_some());
        assert!(single_paragraph(&[]).is_none());
    }
}
