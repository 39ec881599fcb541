// crates/core/src/parser/block_parser.rs
//! ブロックパーサの共通インターフェース
//!
//! 各ブロック構文（見出し、コードブロック、リスト項目など）は
//! [`BlockParser`] を実装し、[`DocumentParser`] から順番に呼び出されます。
//!
//! # Example
//!
//! ```rust
//! use markdown_kit_core::ast::Block;
//! use markdown_kit_core::parser::{BlockParser, DocumentParser, Parsed};
//!
//! /// `%%%` on its own line becomes a thematic break.
//! struct PercentBreak;
//!
//! impl BlockParser for PercentBreak {
//!     fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed> {
//!         if doc.content().trim_end() != "%%%" {
//!             return None;
//!         }
//!         doc.read_next_line();
//!         Some(Parsed::Block(Block::ThematicBreak))
//!     }
//! }
//! ```

use crate::ast::{Block, ListType};

use super::document::DocumentParser;

/// Outcome of a successful [`BlockParser::parse`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A complete leaf block. The parser has consumed all of its lines.
    Block(Block),
    /// A new container starts; the rest of the current line belongs to it.
    Container(ContainerKind),
}

/// Containers that stay open across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Blockquote,
    /// A list item whose content is indented by `indent` columns.
    ListItem { kind: ListType, indent: usize },
}

/// ブロック構文パーサ
///
/// `parse` は現在行からブロックを認識できない場合 `None` を返し、
/// その際に行カーソルを動かしてはいけません（動かす場合は
/// [`DocumentParser::attempt`] で状態を復元すること）。
pub trait BlockParser: Send + Sync {
    /// Whether this block may start in the middle of a paragraph.
    fn may_interrupt_paragraph(&self) -> bool {
        true
    }

    /// Tries to recognise a block starting at the current line.
    fn parse(&self, doc: &mut DocumentParser<'_>) -> Option<Parsed>;
}
