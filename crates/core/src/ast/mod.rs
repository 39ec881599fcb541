// crates/core/src/ast/mod.rs
//! Abstract syntax tree produced by the parser.

pub mod block;
pub mod fragment;
pub mod text;

pub use block::{Alignment, Block, Blocks, Definition, Lines, ListType, Row, single_paragraph};
pub use fragment::{AutolinkType, DelimiterRunType, TextFragment};
pub use text::Text;
