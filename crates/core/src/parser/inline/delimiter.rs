// crates/core/src/parser/inline/delimiter.rs
//! Splits raw text at characters that may start or end inline markup.

use alloc::vec::Vec;

use crate::ast::{DelimiterRunType, Text, TextFragment};
use crate::parser::inline::{InlineTransformer, LinkRefs, descend};
use crate::parser::util::{is_unicode_punctuation, is_unicode_whitespace};

/// 区切り文字の抽出
#[derive(Debug, Clone)]
pub struct DelimiterTransformer {
    emphasis_chars: Vec<char>,
}

impl Default for DelimiterTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimiterTransformer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_emphasis_chars(['*', '_'])
    }

    #[must_use]
    pub fn with_emphasis_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            emphasis_chars: chars.into_iter().collect(),
        }
    }

    fn split(&self, s: &str, out: &mut Text) {
        let mut start = 0;
        let mut i = 0;
        let mut escape = false;
        while let Some(ch) = s[i..].chars().next() {
            let next = i + ch.len_utf8();
            match ch {
                '`' => {
                    let end = run_end(s, i, ch);
                    push_text(out, &s[start..i]);
                    let kind = if escape {
                        DelimiterRunType::ESCAPED
                    } else {
                        DelimiterRunType::empty()
                    };
                    out.push(TextFragment::Delimiter('`', end - i, kind));
                    start = end;
                    i = end;
                    escape = false;
                }
                '<' | '>' | '[' | ']' | '(' | ')' | '"' | '\'' if !escape => {
                    push_text(out, &s[start..i]);
                    out.push(TextFragment::Delimiter(ch, 1, DelimiterRunType::empty()));
                    start = next;
                    i = next;
                }
                '!' if !escape && s[next..].starts_with('[') => {
                    push_text(out, &s[start..i]);
                    out.push(TextFragment::Delimiter('[', 1, DelimiterRunType::IMAGE));
                    start = next + 1;
                    i = next + 1;
                }
                '\\' => {
                    escape = !escape;
                    i = next;
                }
                c if !escape && self.emphasis_chars.contains(&c) => {
                    let end = run_end(s, i, c);
                    push_text(out, &s[start..i]);
                    let before = s[..i].chars().next_back();
                    let after = s[end..].chars().next();
                    let count = s[i..end].chars().count();
                    out.push(TextFragment::Delimiter(c, count, classify(before, after)));
                    start = end;
                    i = end;
                }
                _ => {
                    escape = false;
                    i = next;
                }
            }
        }
        push_text(out, &s[start..]);
    }
}

impl InlineTransformer for DelimiterTransformer {
    fn transform_fragment(&self, fragment: TextFragment, refs: &LinkRefs, out: &mut Text) {
        match fragment {
            TextFragment::Text(s) => self.split(&s, out),
            other => out.push(descend(self, other, refs)),
        }
    }
}

fn run_end(s: &str, start: usize, ch: char) -> usize {
    s[start..]
        .char_indices()
        .find(|&(_, c)| c != ch)
        .map_or(s.len(), |(offset, _)| start + offset)
}

fn push_text(out: &mut Text, s: &str) {
    if !s.is_empty() {
        out.push(TextFragment::from(s));
    }
}

/// Flanking classification of an emphasis run between `before` and `after`.
///
/// The start and end of a line count as whitespace.
fn classify(before: Option<char>, after: Option<char>) -> DelimiterRunType {
    let mut kind = DelimiterRunType::empty();
    let Some(before) = before else {
        if after.is_some_and(|c| !is_unicode_whitespace(c)) {
            kind |= DelimiterRunType::LEFT_FLANKING;
        }
        return kind;
    };
    let before_punct = is_unicode_punctuation(before);
    let after_punct = after.is_some_and(is_unicode_punctuation);
    if let Some(after) = after
        && !is_unicode_whitespace(after)
        && (!after_punct || is_unicode_whitespace(before) || before_punct)
    {
        kind |= DelimiterRunType::LEFT_FLANKING;
    }
    if !is_unicode_whitespace(before)
        && (!before_punct || after.is_none_or(|c| is_unicode_whitespace(c) || after_punct))
    {
        kind |= DelimiterRunType::RIGHT_FLANKING;
    }
    if !kind.is_empty() {
        if before_punct {
            kind |= DelimiterRunType::LEFT_PUNCTUATION;
        }
        if after_punct {
            kind |= DelimiterRunType::RIGHT_PUNCTUATION;
        }
    }
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> Vec<TextFragment> {
        let mut out = Text::new();
        DelimiterTransformer::new().split(s, &mut out);
        out.into_iter().collect()
    }

    #[test]
    fn splits_brackets_and_images() {
        assert_eq!(
            split("a ![b](c)"),
            vec![
                TextFragment::from("a "),
                TextFragment::Delimiter('[', 1, DelimiterRunType::IMAGE),
                TextFragment::from("b"),
                TextFragment::Delimiter(']', 1, DelimiterRunType::empty()),
                TextFragment::Delimiter('(', 1, DelimiterRunType::empty()),
                TextFragment::from("c"),
                TextFragment::Delimiter(')', 1, DelimiterRunType::empty()),
            ]
        );
    }

    #[test]
    fn escaped_characters_stay_in_text() {
        assert_eq!(split("\\[x\\*"), vec![TextFragment::from("\\[x\\*")]);
        assert_eq!(
            split("\\``"),
            vec![
                TextFragment::from("\\"),
                TextFragment::Delimiter('`', 2, DelimiterRunType::ESCAPED),
            ]
        );
    }

    #[test]
    fn emphasis_runs_are_classified() {
        let fragments = split("**a** b");
        assert_eq!(
            fragments[0],
            TextFragment::Delimiter('*', 2, DelimiterRunType::LEFT_FLANKING)
        );
        assert_eq!(
            fragments[2],
            TextFragment::Delimiter('*', 2, DelimiterRunType::RIGHT_FLANKING)
        );
        let fragments = split("a_\"b\"_");
        assert_eq!(
            fragments[1],
            TextFragment::Delimiter(
                '_',
                1,
                DelimiterRunType::RIGHT_FLANKING | DelimiterRunType::RIGHT_PUNCTUATION
            )
        );
    }

    #[test]
    fn whitespace_surrounded_run_does_not_flank() {
        assert_eq!(classify(Some(' '), Some(' ')), DelimiterRunType::empty());
        assert_eq!(classify(None, Some(' ')), DelimiterRunType::empty());
    }
}
