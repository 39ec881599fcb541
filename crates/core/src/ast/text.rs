// crates/core/src/ast/text.rs
//! Sequences of inline fragments.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, RangeInclusive};
use core::slice;
use serde::{Deserialize, Serialize};

use super::fragment::TextFragment;

/// Inline content of a paragraph, heading, table cell or link.
///
/// 構文解析の第一段階では `Text`/`SoftLineBreak`/`HardLineBreak` のみを含み、
/// インライン変換器を通すことで強調やリンクなどの構造が与えられる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text {
    fragments: Vec<TextFragment>,
}

impl Text {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    #[must_use]
    pub const fn from_fragments(fragments: Vec<TextFragment>) -> Self {
        Self { fragments }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<&TextFragment> {
        self.fragments.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TextFragment> {
        self.fragments.last()
    }

    #[must_use]
    pub fn fragments(&self) -> &[TextFragment] {
        &self.fragments
    }

    pub fn iter(&self) -> slice::Iter<'_, TextFragment> {
        self.fragments.iter()
    }

    pub fn push(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }

    /// Appends all fragments of `other`.
    pub fn append(&mut self, other: Self) {
        self.fragments.extend(other.fragments);
    }

    /// Appends a source line, separating it from the previous one.
    ///
    /// A previous line ending in a backslash turns into a hard line break;
    /// otherwise a soft line break is inserted.
    pub fn push_line(&mut self, line: &str, hard_break: bool) {
        match self.fragments.last_mut() {
            Some(TextFragment::Text(prev)) if prev.ends_with('\\') => {
                prev.pop();
                let emptied = prev.is_empty();
                if emptied {
                    self.fragments.pop();
                }
                self.fragments.push(TextFragment::HardLineBreak);
            }
            Some(TextFragment::Text(_)) => self.fragments.push(TextFragment::SoftLineBreak),
            _ => {}
        }
        self.fragments.push(TextFragment::Text(String::from(line)));
        if hard_break {
            self.fragments.push(TextFragment::HardLineBreak);
        }
    }

    /// Replaces the fragments in `range` with `with`.
    pub fn replace<I>(&mut self, range: RangeInclusive<usize>, with: I)
    where
        I: IntoIterator<Item = TextFragment>,
    {
        self.fragments.splice(range, with);
    }

    /// Drops a single trailing line break.
    #[must_use]
    pub fn finalized(mut self) -> Self {
        if self.fragments.last().is_some_and(TextFragment::is_line_break) {
            self.fragments.pop();
        }
        self
    }

    /// Text without markup. Line breaks become spaces.
    #[must_use]
    pub fn raw_string(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            fragment.write_raw(&mut out);
        }
        out
    }

    /// Returns `true` if a link appears anywhere in this text.
    #[must_use]
    pub fn contains_link(&self) -> bool {
        self.fragments.iter().any(|fragment| match fragment {
            TextFragment::Link(..) => true,
            TextFragment::Emph(t) | TextFragment::Strong(t) | TextFragment::Image(t, ..) => {
                t.contains_link()
            }
            _ => false,
        })
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.iter().try_for_each(|fragment| fragment.fmt(f))
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        let mut text = Self::new();
        if !s.is_empty() {
            text.push(TextFragment::from(s));
        }
        text
    }
}

impl From<Vec<TextFragment>> for Text {
    fn from(fragments: Vec<TextFragment>) -> Self {
        Self::from_fragments(fragments)
    }
}

impl FromIterator<TextFragment> for Text {
    fn from_iter<I: IntoIterator<Item = TextFragment>>(iter: I) -> Self {
        Self::from_fragments(iter.into_iter().collect())
    }
}

impl Extend<TextFragment> for Text {
    fn extend<I: IntoIterator<Item = TextFragment>>(&mut self, iter: I) {
        self.fragments.extend(iter);
    }
}

impl IntoIterator for Text {
    type Item = TextFragment;
    type IntoIter = alloc::vec::IntoIter<TextFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = &'a TextFragment;
    type IntoIter = slice::Iter<'a, TextFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

impl Index<usize> for Text {
    type Output = TextFragment;

    fn index(&self, index: usize) -> &TextFragment {
        &self.fragments[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> TextFragment {
        TextFragment::Text(s.into())
    }

    #[test]
    fn push_line_inserts_soft_break() {
        let mut t = Text::new();
        t.push_line("one", false);
        t.push_line("two", false);
        assert_eq!(
            t.fragments(),
            &[text("one"), TextFragment::SoftLineBreak, text("two")]
        );
    }

    #[test]
    fn trailing_backslash_becomes_hard_break() {
        let mut t = Text::new();
        t.push_line("one\\", false);
        t.push_line("\\", false);
        t.push_line("two", false);
        assert_eq!(
            t.fragments(),
            &[
                text("one"),
                TextFragment::HardLineBreak,
                TextFragment::HardLineBreak,
                text("two"),
            ]
        );
    }

    #[test]
    fn explicit_hard_break_suppresses_soft_break() {
        let mut t = Text::new();
        t.push_line("foo", true);
        t.push_line("bar", false);
        assert_eq!(
            t.fragments(),
            &[text("foo"), TextFragment::HardLineBreak, text("bar")]
        );
    }

    #[test]
    fn finalized_drops_one_trailing_break() {
        let mut t = Text::new();
        t.push_line("foo", true);
        let t = t.finalized();
        assert_eq!(t.fragments(), &[text("foo")]);
    }

    #[test]
    fn replace_splices_fragments() {
        let mut t: Text = vec![text("a"), text("b"), text("c")].into();
        t.replace(0..=1, [TextFragment::Emph(Text::from("ab"))]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.raw_string(), "abc");
        assert_eq!(t.to_string(), "*ab*c");
    }

    #[test]
    fn raw_string_replaces_breaks_with_spaces() {
        let mut t = Text::new();
        t.push_line("a", false);
        t.push_line("b", false);
        assert_eq!(t.raw_string(), "a b");
    }
}
