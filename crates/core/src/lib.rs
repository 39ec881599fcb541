#![cfg_attr(not(test), no_std)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Markdown parsing and HTML generation.
//!
//! ```rust
//! use markdown_kit_core::{HtmlGenerator, MarkdownParser};
//!
//! let doc = MarkdownParser::standard().parse("Hello *world*\n");
//! assert_eq!(HtmlGenerator::new().generate(&doc), "<p>Hello <em>world</em></p>\n");
//! ```

extern crate alloc;

pub mod ast;
pub mod html;
pub mod parser;
pub mod version;

pub use ast::{Block, Text, TextFragment};
pub use html::HtmlGenerator;
pub use parser::{Flavor, MarkdownParser};
pub use version::{VERSION_BYTES, VERSION_NUMBER, VERSION_STRING};

/// Parses `input` with the given flavour and renders it as HTML.
#[must_use]
pub fn markdown_to_html(input: &str, flavor: Flavor) -> alloc::string::String {
    let doc = MarkdownParser::for_flavor(flavor).parse(input);
    HtmlGenerator::new().generate(&doc)
}
