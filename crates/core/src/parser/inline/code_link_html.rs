// crates/core/src/parser/inline/code_link_html.rs
//! Code spans, autolinks and inline raw HTML.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::{AutolinkType, Text, TextFragment};
use crate::parser::inline::{InlineTransformer, LinkRefs, raw_text};
use crate::parser::util::{is_email, is_html_tag, is_uri};

/// コードスパン、自動リンク、HTML タグ
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeLinkHtmlTransformer;

impl InlineTransformer for CodeLinkHtmlTransformer {
    fn transform(&self, text: Text, refs: &LinkRefs) -> Text {
        let fragments: Vec<TextFragment> = text.into_iter().collect();
        let mut out = Text::new();
        let mut i = 0;
        while i < fragments.len() {
            let matched = match &fragments[i] {
                TextFragment::Delimiter('`', n, kind) if kind.is_empty() => code_span(&fragments, i, *n),
                TextFragment::Delimiter('<', _, _) => angle_brackets(&fragments, i),
                _ => None,
            };
            match matched {
                Some((fragment, end)) => {
                    out.push(fragment);
                    i = end + 1;
                }
                None => {
                    self.transform_fragment(fragments[i].clone(), refs, &mut out);
                    i += 1;
                }
            }
        }
        out
    }
}

/// Scans for fragments that may appear inside a span; anything already
/// structured ends the scan.
const fn scannable(fragment: &TextFragment) -> bool {
    matches!(
        fragment,
        TextFragment::Text(_)
            | TextFragment::Delimiter(..)
            | TextFragment::SoftLineBreak
            | TextFragment::HardLineBreak
    )
}

fn code_span(fragments: &[TextFragment], open: usize, length: usize) -> Option<(TextFragment, usize)> {
    for (end, fragment) in fragments.iter().enumerate().skip(open + 1) {
        match fragment {
            TextFragment::Delimiter('`', n, _) if *n == length => {
                let code = raw_text(&fragments[open + 1..end], " ");
                return Some((TextFragment::Code(strip_code_padding(code)), end));
            }
            f if scannable(f) => {}
            _ => return None,
        }
    }
    None
}

/// One leading and one trailing space are removed if both are present.
fn strip_code_padding(code: String) -> String {
    if code.len() >= 2
        && code.starts_with(' ')
        && code.ends_with(' ')
        && !code.bytes().all(|b| b == b' ')
    {
        code[1..code.len() - 1].into()
    } else {
        code
    }
}

fn angle_brackets(fragments: &[TextFragment], open: usize) -> Option<(TextFragment, usize)> {
    for (end, fragment) in fragments.iter().enumerate().skip(open + 1) {
        match fragment {
            TextFragment::Delimiter('>', ..) => {
                let content = raw_text(&fragments[open + 1..end], "\n");
                if is_uri(&content) {
                    return Some((TextFragment::Autolink(AutolinkType::Uri, content), end));
                }
                if is_email(&content) {
                    return Some((TextFragment::Autolink(AutolinkType::Email, content), end));
                }
                if is_html_tag(&content) {
                    return Some((TextFragment::Html(content), end));
                }
            }
            f if scannable(f) => {}
            _ => return None,
        }
    }
    None
}
