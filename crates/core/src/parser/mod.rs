// crates/core/src/parser/mod.rs
//! Markdown パーサ
//!
//! [`MarkdownParser`] は二段階で動作します:
//!
//! 1. [`DocumentParser`] が [`BlockParser`] 群を使ってブロック構造を組み立てる
//! 2. [`InlineParser`] が [`InlineTransformer`] 群でインライン要素を解析する
//!
//! ```rust
//! use markdown_kit_core::ast::Block;
//! use markdown_kit_core::parser::MarkdownParser;
//!
//! let doc = MarkdownParser::standard().parse("# Title\n\nSome *text*.\n");
//! let Block::Document(blocks) = doc else { unreachable!() };
//! assert_eq!(blocks.len(), 2);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::ast::Block;

pub mod block_parser;
pub mod blocks;
pub mod document;
pub mod inline;
pub mod util;

pub use block_parser::{BlockParser, ContainerKind, Parsed};
pub use document::{DocumentParser, LineCursor, bundle};
pub use inline::{InlineParser, InlineTransformer, LinkRefs, LinkTarget};

/// Markdown flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// CommonMark block and inline syntax.
    #[default]
    Standard,
    /// Standard syntax plus tables and definition lists.
    Extended,
}

/// A configured two-phase Markdown parser.
///
/// Parsers hold no per-document state and can be shared between threads.
pub struct MarkdownParser {
    block_parsers: Vec<Box<dyn BlockParser>>,
    inline_transformers: Vec<Box<dyn InlineTransformer>>,
    definition_lists: bool,
}

impl MarkdownParser {
    /// Creates a parser from explicit block parsers and inline transformers.
    #[must_use]
    pub fn new(
        block_parsers: Vec<Box<dyn BlockParser>>,
        inline_transformers: Vec<Box<dyn InlineTransformer>>,
    ) -> Self {
        Self {
            block_parsers,
            inline_transformers,
            definition_lists: false,
        }
    }

    /// Bundles paragraphs followed by `:` items into definition lists.
    #[must_use]
    pub const fn with_definition_lists(mut self, enabled: bool) -> Self {
        self.definition_lists = enabled;
        self
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(blocks::standard(), inline::standard())
    }

    #[must_use]
    pub fn extended() -> Self {
        Self::new(blocks::extended(), inline::standard()).with_definition_lists(true)
    }

    #[must_use]
    pub fn for_flavor(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Standard => Self::standard(),
            Flavor::Extended => Self::extended(),
        }
    }

    /// Parses the block structure only; text is left raw.
    #[must_use]
    pub fn parse_blocks(&self, input: &str) -> Block {
        DocumentParser::new(input, self.definition_lists).parse(&self.block_parsers)
    }

    /// Parses `input` into a `Block::Document` with inline markup resolved.
    #[must_use]
    pub fn parse(&self, input: &str) -> Block {
        let document = self.parse_blocks(input);
        let inline = InlineParser::new(&self.inline_transformers, &document);
        inline.parse(document)
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::standard()
    }
}

impl core::fmt::Debug for MarkdownParser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarkdownParser")
            .field("block_parsers", &self.block_parsers.len())
            .field("inline_transformers", &self.inline_transformers.len())
            .field("definition_lists", &self.definition_lists)
            .finish()
    }
}
