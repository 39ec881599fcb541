// crates/core/src/parser/blocks/mod.rs
//! Built-in block parsers.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::block_parser::BlockParser;

pub mod blockquote;
pub mod code;
pub mod heading;
pub mod html;
pub mod link_ref;
pub mod list_item;
pub mod table;
pub mod thematic_break;

pub use blockquote::BlockquoteParser;
pub use code::{FencedCodeBlockParser, IndentedCodeBlockParser};
pub use heading::{AtxHeadingParser, SetextHeadingParser};
pub use html::HtmlBlockParser;
pub use link_ref::LinkRefDefinitionParser;
pub use list_item::ListItemParser;
pub use table::TableParser;
pub use thematic_break::ThematicBreakParser;

/// CommonMark block parsers in the order they are tried.
#[must_use]
pub fn standard() -> Vec<Box<dyn BlockParser>> {
    alloc::vec![
        Box::new(AtxHeadingParser),
        Box::new(SetextHeadingParser),
        Box::new(ThematicBreakParser),
        Box::new(IndentedCodeBlockParser),
        Box::new(FencedCodeBlockParser),
        Box::new(HtmlBlockParser),
        Box::new(LinkRefDefinitionParser),
        Box::new(BlockquoteParser),
        Box::new(ListItemParser::new()),
    ]
}

/// Standard parsers plus tables and `:` definition items.
#[must_use]
pub fn extended() -> Vec<Box<dyn BlockParser>> {
    alloc::vec![
        Box::new(AtxHeadingParser),
        Box::new(SetextHeadingParser),
        Box::new(ThematicBreakParser),
        Box::new(IndentedCodeBlockParser),
        Box::new(FencedCodeBlockParser),
        Box::new(HtmlBlockParser),
        Box::new(LinkRefDefinitionParser),
        Box::new(BlockquoteParser),
        Box::new(ListItemParser::extended()),
        Box::new(TableParser),
    ]
}
