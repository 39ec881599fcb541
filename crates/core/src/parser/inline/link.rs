// crates/core/src/parser/inline/link.rs
//! Inline links, reference links and images.
//!
//! ```text
//! [text](destination "title")   inline
//! [text][label]                 full reference
//! [text][]                      collapsed reference
//! [text]                        shortcut reference
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::{DelimiterRunType, Text, TextFragment};
use crate::parser::inline::{Cursor, InlineTransformer, LinkRefs, raw_text};
use crate::parser::util::is_whitespace;

const MAX_LABEL_LENGTH: usize = 999;

/// リンクと画像
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTransformer;

impl InlineTransformer for LinkTransformer {
    fn transform(&self, text: Text, refs: &LinkRefs) -> Text {
        let fragments: Vec<TextFragment> = text.into_iter().collect();
        let mut out = Text::new();
        let mut i = 0;
        while i < fragments.len() {
            if let TextFragment::Delimiter('[', _, kind) = &fragments[i] {
                let image = kind.contains(DelimiterRunType::IMAGE);
                if let Some(close) = closing_bracket(&fragments, i)
                    && let Some((link, end)) = self.complete(image, &fragments, i + 1, close, refs)
                {
                    out.push(link);
                    i = end;
                    continue;
                }
            }
            self.transform_fragment(fragments[i].clone(), refs, &mut out);
            i += 1;
        }
        out
    }
}

impl LinkTransformer {
    /// Builds the link whose text is `fragments[start..close]`.
    ///
    /// Returns the link and the index of the first fragment after it.
    fn complete(
        &self,
        image: bool,
        fragments: &[TextFragment],
        start: usize,
        close: usize,
        refs: &LinkRefs,
    ) -> Option<(TextFragment, usize)> {
        let inner = &fragments[start..close];
        let text = || {
            let text = self.transform(inner.iter().cloned().collect(), refs);
            (image || !text.contains_link()).then_some(text)
        };
        let make = |text: Text, destination: Option<String>, title: Option<String>| {
            if image {
                TextFragment::Image(text, destination, title)
            } else {
                TextFragment::Link(text, destination, title)
            }
        };
        let after = close + 1;
        match fragments.get(after) {
            Some(TextFragment::Delimiter('(', ..)) => {
                let mut cursor = Cursor::new(fragments, after + 1);
                if let Some((destination, title)) = inline_target(&mut cursor) {
                    return Some((make(text()?, destination, title), cursor.pos()));
                }
            }
            Some(TextFragment::Delimiter('[', _, kind)) if kind.is_empty() => {
                let mut cursor = Cursor::new(fragments, after + 1);
                if let Some(label) = reference_label(&mut cursor) {
                    let label = if label.trim().is_empty() {
                        raw_text(inner, " ")
                    } else {
                        label
                    };
                    let target = refs.get(&label)?;
                    let (destination, title) = (target.destination.clone(), target.title.clone());
                    return Some((make(text()?, Some(destination), title), cursor.pos()));
                }
            }
            _ => {}
        }
        let label = raw_text(inner, " ");
        if label.chars().count() > MAX_LABEL_LENGTH {
            return None;
        }
        let target = refs.get(&label)?;
        Some((
            make(text()?, Some(target.destination.clone()), target.title.clone()),
            after,
        ))
    }
}

/// Index of the `]` closing the bracket opened at `open`.
fn closing_bracket(fragments: &[TextFragment], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, fragment) in fragments.iter().enumerate().skip(open + 1) {
        match fragment {
            TextFragment::Delimiter('[', ..) => depth += 1,
            TextFragment::Delimiter(']', ..) if depth == 0 => return Some(i),
            TextFragment::Delimiter(']', ..) => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Reads `label]` after the `[` of a full or collapsed reference.
fn reference_label(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut label = String::new();
    for fragment in cursor.by_ref() {
        match fragment {
            TextFragment::Delimiter(']', ..) => return Some(label),
            TextFragment::Delimiter('[', ..) => return None,
            f if f.is_line_break() => label.push(' '),
            f => f.write_raw(&mut label),
        }
        if label.chars().count() > MAX_LABEL_LENGTH {
            return None;
        }
    }
    None
}

type Target = (Option<String>, Option<String>);

/// Parses `destination "title")` following the `(` of an inline link.
fn inline_target(cursor: &mut Cursor<'_>) -> Option<Target> {
    let destination = match cursor.skip_whitespace()? {
        TextFragment::Delimiter(')', ..) => {
            cursor.next();
            return Some((None, None));
        }
        TextFragment::Delimiter('<', ..) => {
            cursor.next();
            angle_destination(cursor)?
        }
        TextFragment::Html(s) | TextFragment::Autolink(_, s) if !s.contains('\n') => {
            cursor.next();
            s.clone()
        }
        _ => match bare_destination(cursor)? {
            BareDestination::Closed(destination) => {
                return Some((non_empty(destination), None));
            }
            BareDestination::Open(destination) => destination,
        },
    };
    let closing = match cursor.skip_whitespace()? {
        TextFragment::Delimiter(')', ..) => {
            cursor.next();
            return Some((non_empty(destination), None));
        }
        TextFragment::Delimiter('"', ..) => '"',
        TextFragment::Delimiter('\'', ..) => '\'',
        TextFragment::Delimiter('(', ..) => ')',
        _ => return None,
    };
    cursor.next();
    let title = title(cursor, closing)?;
    match cursor.skip_whitespace()? {
        TextFragment::Delimiter(')', ..) => {
            cursor.next();
            Some((non_empty(destination), non_empty(title)))
        }
        _ => None,
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn angle_destination(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut destination = String::new();
    for fragment in cursor.by_ref() {
        match fragment {
            TextFragment::Delimiter('>', ..) => return Some(destination),
            TextFragment::Delimiter('<', ..) => return None,
            f if f.is_line_break() => return None,
            f => f.write_raw(&mut destination),
        }
    }
    None
}

enum BareDestination {
    /// The destination was terminated by the link's closing `)`.
    Closed(String),
    /// Whitespace follows; a title or `)` comes next.
    Open(String),
}

fn bare_destination(cursor: &mut Cursor<'_>) -> Option<BareDestination> {
    let mut destination = String::new();
    let mut open = 0usize;
    while let Some(fragment) = cursor.peek() {
        match fragment {
            TextFragment::Delimiter('(', ..) => open += 1,
            TextFragment::Delimiter(')', ..) if open == 0 => {
                cursor.next();
                return Some(BareDestination::Closed(destination));
            }
            TextFragment::Delimiter(')', ..) => open -= 1,
            TextFragment::Text(s) => {
                let s = if destination.is_empty() {
                    s.trim_start_matches(is_whitespace)
                } else {
                    s.as_str()
                };
                if let Some(ws) = s.find(|c: char| is_whitespace(c) || c.is_ascii_control()) {
                    if !s[ws..].chars().all(is_whitespace) {
                        return None;
                    }
                    destination.push_str(&s[..ws]);
                    cursor.next();
                    return Some(BareDestination::Open(destination));
                }
                destination.push_str(s);
                cursor.next();
                continue;
            }
            f if f.is_line_break() => return Some(BareDestination::Open(destination)),
            _ => {}
        }
        fragment.write_raw(&mut destination);
        cursor.next();
    }
    None
}

/// Reads a title up to the unescaped `closing` delimiter.
fn title(cursor: &mut Cursor<'_>, closing: char) -> Option<String> {
    let mut title = String::new();
    for fragment in cursor.by_ref() {
        match fragment {
            TextFragment::Delimiter(ch, ..) if *ch == closing => return Some(title),
            f if f.is_line_break() => title.push('\n'),
            f => f.write_raw(&mut title),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::inline::{CodeLinkHtmlTransformer, DelimiterTransformer};

    fn run(s: &str, refs: &LinkRefs) -> Vec<TextFragment> {
        let text = DelimiterTransformer::new().transform(Text::from(s), refs);
        let text = CodeLinkHtmlTransformer.transform(text, refs);
        LinkTransformer.transform(text, refs).into_iter().collect()
    }

    fn link(text: &str, uri: Option<&str>, title: Option<&str>) -> TextFragment {
        TextFragment::Link(Text::from(text), uri.map(Into::into), title.map(Into::into))
    }

    #[test]
    fn inline_links() {
        let refs = LinkRefs::new();
        assert_eq!(run("[a](/u)", &refs), vec![link("a", Some("/u"), None)]);
        assert_eq!(run("[a](/u \"t\")", &refs), vec![link("a", Some("/u"), Some("t"))]);
        assert_eq!(run("[a](<b c> 't')", &refs), vec![link("a", Some("b c"), Some("t"))]);
        assert_eq!(run("[a]()", &refs), vec![link("a", None, None)]);
        assert_eq!(run("[a](x(y)z)", &refs), vec![link("a", Some("x(y)z"), None)]);
    }

    #[test]
    fn invalid_inline_link_stays_text() {
        let refs = LinkRefs::new();
        let fragments = run("[a](b c)", &refs);
        assert!(matches!(fragments[0], TextFragment::Delimiter('[', ..)));
    }

    #[test]
    fn reference_links() {
        let mut refs = LinkRefs::new();
        refs.insert("Foo", "/foo".into(), Some("T".into()));
        assert_eq!(run("[foo]", &refs), vec![link("foo", Some("/foo"), Some("T"))]);
        assert_eq!(run("[x][FOO]", &refs), vec![link("x", Some("/foo"), Some("T"))]);
        assert_eq!(run("[Foo][]", &refs), vec![link("Foo", Some("/foo"), Some("T"))]);
        assert!(matches!(run("[bar]", &refs)[0], TextFragment::Delimiter('[', ..)));
    }

    #[test]
    fn images_and_nesting() {
        let refs = LinkRefs::new();
        assert_eq!(
            run("![a](/i.png)", &refs),
            vec![TextFragment::Image(Text::from("a"), Some("/i.png".into()), None)]
        );
        let fragments = run("[a [b](/x)](/y)", &refs);
        assert!(matches!(fragments[0], TextFragment::Delimiter('[', ..)));
        assert!(fragments.iter().any(|f| matches!(f, TextFragment::Link(_, Some(u), _) if u == "/x")));
    }
}
