// crates/core/src/parser/inline/escape.rs
use alloc::borrow::Cow;
use alloc::string::String;

use crate::ast::{Text, TextFragment};
use crate::parser::inline::{InlineTransformer, LinkRefs};

/// Removes backslash escapes from text, link destinations and titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeTransformer;

impl InlineTransformer for EscapeTransformer {
    fn transform_fragment(&self, fragment: TextFragment, refs: &LinkRefs, out: &mut Text) {
        let fragment = match fragment {
            TextFragment::Text(s) => TextFragment::Text(resolve_owned(s)),
            TextFragment::Link(inner, uri, title) => TextFragment::Link(
                self.transform(inner, refs),
                uri.map(resolve_owned),
                title.map(resolve_owned),
            ),
            TextFragment::Image(inner, uri, title) => TextFragment::Image(
                self.transform(inner, refs),
                uri.map(resolve_owned),
                title.map(resolve_owned),
            ),
            TextFragment::Emph(inner) => TextFragment::Emph(self.transform(inner, refs)),
            TextFragment::Strong(inner) => TextFragment::Strong(self.transform(inner, refs)),
            other => other,
        };
        out.push(fragment);
    }
}

fn resolve_owned(s: String) -> String {
    if s.contains('\\') {
        resolve_escapes(&s).into_owned()
    } else {
        s
    }
}

/// Drops the backslash in front of ASCII punctuation.
#[must_use]
pub fn resolve_escapes(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_punctuation_is_escaped() {
        assert_eq!(resolve_escapes("\\*a\\b\\\\"), "*a\\b\\");
        assert_eq!(resolve_escapes("plain"), Cow::Borrowed("plain"));
    }

    #[test]
    fn titles_and_destinations_are_resolved() {
        let text = Text::from_fragments(vec![TextFragment::Link(
            Text::from("\\_a"),
            Some("/u\\)".into()),
            Some("\\\"t\\\"".into()),
        )]);
        let text = EscapeTransformer.transform(text, &LinkRefs::new());
        assert_eq!(
            text.fragments(),
            [TextFragment::Link(
                Text::from("_a"),
                Some("/u)".into()),
                Some("\"t\"".into())
            )]
        );
    }
}
