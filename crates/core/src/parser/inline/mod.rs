// crates/core/src/parser/inline/mod.rs
//! インライン要素の解析
//!
//! Block parsing leaves every paragraph, heading and table cell as raw
//! [`Text`]. [`InlineParser`] pipes that text through a sequence of
//! [`InlineTransformer`]s, each of which recognises one class of markup and
//! replaces raw fragments with structured ones.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::ast::{Block, Blocks, Definition, Row, Text, TextFragment};

use super::util::normalize_label;

pub mod code_link_html;
pub mod delimiter;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use code_link_html::CodeLinkHtmlTransformer;
pub use delimiter::DelimiterTransformer;
pub use emphasis::EmphasisTransformer;
pub use escape::EscapeTransformer;
pub use link::LinkTransformer;

/// Destination and title of a link reference definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub destination: String,
    pub title: Option<String>,
}

/// Link reference definitions of a document, keyed by normalised label.
#[derive(Debug, Clone, Default)]
pub struct LinkRefs {
    targets: HashMap<String, LinkTarget>,
}

impl LinkRefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every reference definition in `block`; the first definition of a label wins.
    #[must_use]
    pub fn collect(block: &Block) -> Self {
        let mut refs = Self::new();
        refs.collect_from(block);
        refs
    }

    fn collect_from(&mut self, block: &Block) {
        match block {
            Block::ReferenceDef {
                label,
                destination,
                title,
            } => {
                let title = (!title.is_empty()).then(|| title.join("\n"));
                self.insert(label, destination.clone(), title);
            }
            Block::DefinitionList(definitions) => {
                for definition in definitions {
                    definition
                        .descriptions
                        .iter()
                        .for_each(|b| self.collect_from(b));
                }
            }
            other => {
                if let Some(children) = other.children() {
                    children.iter().for_each(|b| self.collect_from(b));
                }
            }
        }
    }

    /// Adds a definition unless the label is already defined.
    pub fn insert(&mut self, label: &str, destination: String, title: Option<String>) {
        self.targets
            .entry(normalize_label(label))
            .or_insert(LinkTarget { destination, title });
    }

    /// Looks up a label, normalising it first.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&LinkTarget> {
        self.targets.get(&normalize_label(label))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A pass over inline text.
///
/// The default implementation maps each fragment through
/// [`transform_fragment`](Self::transform_fragment), which in turn descends
/// into emphasis, link and image text.
pub trait InlineTransformer: Send + Sync {
    fn transform(&self, text: Text, refs: &LinkRefs) -> Text {
        let mut out = Text::new();
        for fragment in text {
            self.transform_fragment(fragment, refs, &mut out);
        }
        out
    }

    fn transform_fragment(&self, fragment: TextFragment, refs: &LinkRefs, out: &mut Text) {
        out.push(descend(self, fragment, refs));
    }
}

/// Applies `transformer` to the text nested inside `fragment`.
pub fn descend<T>(transformer: &T, fragment: TextFragment, refs: &LinkRefs) -> TextFragment
where
    T: InlineTransformer + ?Sized,
{
    match fragment {
        TextFragment::Emph(inner) => TextFragment::Emph(transformer.transform(inner, refs)),
        TextFragment::Strong(inner) => TextFragment::Strong(transformer.transform(inner, refs)),
        TextFragment::Link(inner, uri, title) => {
            TextFragment::Link(transformer.transform(inner, refs), uri, title)
        }
        TextFragment::Image(inner, uri, title) => {
            TextFragment::Image(transformer.transform(inner, refs), uri, title)
        }
        other => other,
    }
}

/// The CommonMark transformer pipeline.
#[must_use]
pub fn standard() -> Vec<Box<dyn InlineTransformer>> {
    alloc::vec![
        Box::new(DelimiterTransformer::new()),
        Box::new(CodeLinkHtmlTransformer),
        Box::new(LinkTransformer),
        Box::new(EmphasisTransformer::new()),
        Box::new(EscapeTransformer),
    ]
}

/// Runs the transformers over every inline container of a document.
pub struct InlineParser<'t> {
    transformers: &'t [Box<dyn InlineTransformer>],
    refs: LinkRefs,
}

impl<'t> InlineParser<'t> {
    /// Prepares a parser for `document`, collecting its link reference definitions.
    #[must_use]
    pub fn new(transformers: &'t [Box<dyn InlineTransformer>], document: &Block) -> Self {
        let refs = LinkRefs::collect(document);
        log::debug!("collected {} link reference definitions", refs.len());
        Self { transformers, refs }
    }

    #[must_use]
    pub const fn refs(&self) -> &LinkRefs {
        &self.refs
    }

    /// Transforms a single piece of raw text.
    #[must_use]
    pub fn transform(&self, text: Text) -> Text {
        self.transformers
            .iter()
            .fold(text, |text, transformer| transformer.transform(text, &self.refs))
    }

    #[must_use]
    pub fn parse(&self, block: Block) -> Block {
        match block {
            Block::Document(blocks) => Block::Document(self.parse_blocks(blocks)),
            Block::Blockquote(blocks) => Block::Blockquote(self.parse_blocks(blocks)),
            Block::List {
                start,
                tight,
                items,
            } => Block::List {
                start,
                tight,
                items: self.parse_blocks(items),
            },
            Block::ListItem {
                kind,
                tight,
                blocks,
            } => Block::ListItem {
                kind,
                tight,
                blocks: self.parse_blocks(blocks),
            },
            Block::Paragraph(text) => Block::Paragraph(self.transform(text)),
            Block::Heading { level, text } => Block::Heading {
                level,
                text: self.transform(text),
            },
            Block::Table {
                header,
                alignments,
                rows,
            } => Block::Table {
                header: self.transform_row(header),
                alignments,
                rows: rows.into_iter().map(|row| self.transform_row(row)).collect(),
            },
            Block::DefinitionList(definitions) => Block::DefinitionList(
                definitions
                    .into_iter()
                    .map(|definition| Definition {
                        item: self.transform(definition.item),
                        descriptions: self.parse_blocks(definition.descriptions),
                    })
                    .collect(),
            ),
            leaf => leaf,
        }
    }

    fn parse_blocks(&self, blocks: Blocks) -> Blocks {
        blocks.into_iter().map(|block| self.parse(block)).collect()
    }

    fn transform_row(&self, row: Row) -> Row {
        row.into_iter().map(|cell| self.transform(cell)).collect()
    }
}

/// Read access to a fragment slice with lookahead, used by the transformers
/// that match opening and closing delimiters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'f> {
    fragments: &'f [TextFragment],
    pos: usize,
}

impl<'f> Cursor<'f> {
    pub(crate) const fn new(fragments: &'f [TextFragment], pos: usize) -> Self {
        Self { fragments, pos }
    }

    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<&'f TextFragment> {
        self.fragments.get(self.pos)
    }

    /// Skips fragments that are only whitespace or line breaks.
    pub(crate) fn skip_whitespace(&mut self) -> Option<&'f TextFragment> {
        while let Some(fragment) = self.peek() {
            match fragment {
                TextFragment::SoftLineBreak | TextFragment::HardLineBreak => {}
                TextFragment::Text(s) if super::util::is_whitespace_str(s) => {}
                _ => return Some(fragment),
            }
            self.pos += 1;
        }
        None
    }
}

impl<'f> Iterator for Cursor<'f> {
    type Item = &'f TextFragment;

    fn next(&mut self) -> Option<Self::Item> {
        let fragment = self.fragments.get(self.pos)?;
        self.pos += 1;
        Some(fragment)
    }
}

/// Concatenates the raw text of `fragments`, rendering line breaks as `line_break`.
pub(crate) fn raw_text(fragments: &[TextFragment], line_break: &str) -> String {
    let mut out = String::new();
    for fragment in fragments {
        if fragment.is_line_break() {
            out.push_str(line_break);
        } else {
            fragment.write_raw(&mut out);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_definition_wins() {
        let doc = Block::Document(vec![
            Block::ReferenceDef {
                label: "Foo".into(),
                destination: "/one".into(),
                title: vec![],
            },
            Block::Blockquote(vec![Block::ReferenceDef {
                label: "FOO".into(),
                destination: "/two".into(),
                title: vec!["a".into(), "b".into()],
            }]),
            Block::ReferenceDef {
                label: "bar".into(),
                destination: "/bar".into(),
                title: vec!["a".into(), "b".into()],
            },
        ]);
        let refs = LinkRefs::collect(&doc);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs.get("foo").map(|t| t.destination.as_str()), Some("/one"));
        assert_eq!(refs.get(" BAR ").and_then(|t| t.title.as_deref()), Some("a\nb"));
    }

    #[test]
    fn cursor_skips_whitespace() {
        let fragments = vec![
            TextFragment::Text("  ".into()),
            TextFragment::SoftLineBreak,
            TextFragment::Text("x".into()),
        ];
        let mut cursor = Cursor::new(&fragments, 0);
        assert_eq!(cursor.skip_whitespace(), Some(&TextFragment::Text("x".into())));
        assert_eq!(cursor.pos(), 2);
    }
}
