// crates/core/src/html/mod.rs
//! HTML 出力
//!
//! [`HtmlGenerator`] renders a parsed document. Block output follows the
//! CommonMark reference renderer: every block starts on a fresh line and tight
//! list items render their paragraphs without `<p>` tags.

use alloc::string::String;
use core::fmt::Write as _;

use crate::ast::{Alignment, AutolinkType, Block, Definition, Row, Text, TextFragment};

pub mod entities;

pub use entities::{decode_named_characters, encode_predefined_xml_entities};

/// Markdown AST から HTML を生成する
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlGenerator;

impl HtmlGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders a block; for a `Block::Document` this is the whole document.
    #[must_use]
    pub fn generate(&self, block: &Block) -> String {
        let mut out = String::new();
        self.write_block(&mut out, block, false);
        out
    }

    /// Renders inline content.
    #[must_use]
    pub fn generate_text(&self, text: &Text) -> String {
        let mut out = String::new();
        self.write_text(&mut out, text);
        out
    }

    fn write_blocks(&self, out: &mut String, blocks: &[Block], tight: bool) {
        for block in blocks {
            self.write_block(out, block, tight);
        }
    }

    fn write_block(&self, out: &mut String, block: &Block, tight: bool) {
        match block {
            Block::Document(blocks) => self.write_blocks(out, blocks, false),
            Block::Blockquote(blocks) => {
                cr(out);
                out.push_str("<blockquote>\n");
                self.write_blocks(out, blocks, false);
                cr(out);
                out.push_str("</blockquote>\n");
            }
            Block::List { start, tight, items } => {
                cr(out);
                match start {
                    Some(n) if *n != 1 => {
                        let _ = writeln!(out, "<ol start=\"{n}\">");
                    }
                    Some(_) => out.push_str("<ol>\n"),
                    None => out.push_str("<ul>\n"),
                }
                self.write_blocks(out, items, *tight);
                cr(out);
                out.push_str(if start.is_some() { "</ol>\n" } else { "</ul>\n" });
            }
            Block::ListItem { blocks, .. } => {
                cr(out);
                out.push_str("<li>");
                self.write_blocks(out, blocks, tight);
                out.push_str("</li>\n");
            }
            Block::Paragraph(text) if tight => self.write_text(out, text),
            Block::Paragraph(text) => {
                cr(out);
                out.push_str("<p>");
                self.write_text(out, text);
                out.push_str("</p>\n");
            }
            Block::Heading { level, text } => {
                cr(out);
                let level = (*level).clamp(1, 6);
                let _ = write!(out, "<h{level}>");
                self.write_text(out, text);
                let _ = writeln!(out, "</h{level}>");
            }
            Block::IndentedCode(lines) => {
                cr(out);
                out.push_str("<pre><code>");
                write_code_lines(out, lines);
                out.push_str("</code></pre>\n");
            }
            Block::FencedCode { info, lines } => {
                cr(out);
                let language = info.as_deref().and_then(|info| info.split_whitespace().next());
                match language {
                    Some(language) => {
                        let language = decode_named_characters(language);
                        let _ = write!(
                            out,
                            "<pre><code class=\"language-{}\">",
                            encode_predefined_xml_entities(&language)
                        );
                    }
                    None => out.push_str("<pre><code>"),
                }
                write_code_lines(out, lines);
                out.push_str("</code></pre>\n");
            }
            Block::HtmlBlock(lines) => {
                cr(out);
                for line in lines {
                    out.push_str(line);
                }
                cr(out);
            }
            Block::ReferenceDef { .. } => {}
            Block::ThematicBreak => {
                cr(out);
                out.push_str("<hr />\n");
            }
            Block::Table {
                header,
                alignments,
                rows,
            } => {
                cr(out);
                out.push_str("<table><thead><tr>\n");
                self.write_row(out, header, alignments, "th");
                out.push_str("\n</tr></thead><tbody>\n");
                for row in rows {
                    out.push_str("<tr>");
                    self.write_row(out, row, alignments, "td");
                    out.push_str("</tr>\n");
                }
                out.push_str("</tbody></table>\n");
            }
            Block::DefinitionList(definitions) => {
                cr(out);
                out.push_str("<dl>\n");
                for definition in definitions {
                    self.write_definition(out, definition);
                }
                out.push_str("</dl>\n");
            }
        }
    }

    fn write_row(&self, out: &mut String, row: &Row, alignments: &[Alignment], tag: &str) {
        for (i, cell) in row.iter().enumerate() {
            match alignments.get(i).copied().unwrap_or_default() {
                Alignment::Undefined => {
                    let _ = write!(out, "<{tag}>");
                }
                Alignment::Left => {
                    let _ = write!(out, "<{tag} align=\"left\">");
                }
                Alignment::Right => {
                    let _ = write!(out, "<{tag} align=\"right\">");
                }
                Alignment::Center => {
                    let _ = write!(out, "<{tag} align=\"center\">");
                }
            }
            self.write_text(out, cell);
            let _ = write!(out, "</{tag}>");
        }
    }

    fn write_definition(&self, out: &mut String, definition: &Definition) {
        out.push_str("<dt>");
        self.write_text(out, &definition.item);
        out.push_str("</dt>\n");
        for description in &definition.descriptions {
            if let Block::ListItem { tight, blocks, .. } = description {
                out.push_str("<dd>");
                self.write_blocks(out, blocks, *tight);
                out.push_str("</dd>\n");
            }
        }
    }

    fn write_text(&self, out: &mut String, text: &Text) {
        for fragment in text {
            self.write_fragment(out, fragment);
        }
    }

    fn write_fragment(&self, out: &mut String, fragment: &TextFragment) {
        match fragment {
            TextFragment::Text(s) => write_escaped(out, &decode_named_characters(s)),
            TextFragment::Code(s) => {
                out.push_str("<code>");
                write_escaped(out, s);
                out.push_str("</code>");
            }
            TextFragment::Emph(inner) => {
                out.push_str("<em>");
                self.write_text(out, inner);
                out.push_str("</em>");
            }
            TextFragment::Strong(inner) => {
                out.push_str("<strong>");
                self.write_text(out, inner);
                out.push_str("</strong>");
            }
            TextFragment::Link(inner, uri, title) => {
                out.push_str("<a href=\"");
                write_attribute(out, uri.as_deref().unwrap_or_default());
                out.push('"');
                write_title(out, title.as_deref());
                out.push('>');
                self.write_text(out, inner);
                out.push_str("</a>");
            }
            TextFragment::Autolink(kind, target) => {
                out.push_str("<a href=\"");
                if *kind == AutolinkType::Email {
                    out.push_str("mailto:");
                }
                write_escaped(out, target);
                out.push_str("\">");
                write_escaped(out, target);
                out.push_str("</a>");
            }
            TextFragment::Image(inner, Some(uri), title) => {
                out.push_str("<img src=\"");
                write_attribute(out, uri);
                out.push_str("\" alt=\"");
                write_attribute(out, &inner.raw_string());
                out.push('"');
                write_title(out, title.as_deref());
                out.push_str("/>");
            }
            TextFragment::Image(inner, None, _) => self.write_text(out, inner),
            TextFragment::Html(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            TextFragment::Delimiter(..) => write_escaped(out, &fragment.raw_string()),
            TextFragment::SoftLineBreak => out.push('\n'),
            TextFragment::HardLineBreak => out.push_str("<br />\n"),
        }
    }
}

/// Starts a new line unless the output is empty or already at one.
fn cr(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn write_escaped(out: &mut String, s: &str) {
    out.push_str(&encode_predefined_xml_entities(s));
}

/// Attribute values have character references decoded before re-encoding.
fn write_attribute(out: &mut String, s: &str) {
    write_escaped(out, &decode_named_characters(s));
}

fn write_title(out: &mut String, title: Option<&str>) {
    if let Some(title) = title {
        out.push_str(" title=\"");
        write_attribute(out, title);
        out.push('"');
    }
}

/// Code lines keep their terminators; the block always ends with a newline.
fn write_code_lines(out: &mut String, lines: &[String]) {
    for line in lines {
        write_escaped(out, line);
    }
    if lines.last().is_some_and(|line| !line.ends_with('\n')) {
        out.push('\n');
    }
}
