// crates/core/src/ast/fragment.rs
//! Inline text fragments.

use alloc::string::{String, ToString};
use core::fmt;
use core::ops::{BitOr, BitOrAssign};
use serde::{Deserialize, Serialize};

use super::text::Text;

/// Flags describing a run of delimiter characters.
///
/// Flanking and punctuation flags only matter for emphasis runs. `ESCAPED`
/// marks a backtick run preceded by a backslash and `IMAGE` marks the `[` of
/// an image opener `![`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelimiterRunType(u8);

impl DelimiterRunType {
    pub const LEFT_FLANKING: Self = Self(1);
    pub const RIGHT_FLANKING: Self = Self(1 << 1);
    pub const LEFT_PUNCTUATION: Self = Self(1 << 2);
    pub const RIGHT_PUNCTUATION: Self = Self(1 << 3);
    pub const ESCAPED: Self = Self(1 << 4);
    pub const IMAGE: Self = Self(1 << 5);

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for DelimiterRunType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DelimiterRunType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

/// Kind of an autolink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutolinkType {
    Uri,
    Email,
}

/// A piece of inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextFragment {
    Text(String),
    Code(String),
    Emph(Text),
    Strong(Text),
    /// Link text, destination and title.
    Link(Text, Option<String>, Option<String>),
    Autolink(AutolinkType, String),
    /// Image description, source and title.
    Image(Text, Option<String>, Option<String>),
    Html(String),
    /// Unresolved run of `count` delimiter characters.
    Delimiter(char, usize, DelimiterRunType),
    SoftLineBreak,
    HardLineBreak,
}

impl TextFragment {
    /// Text content with all markup dropped; line breaks become spaces.
    #[must_use]
    pub fn raw_string(&self) -> String {
        let mut out = String::new();
        self.write_raw(&mut out);
        out
    }

    pub(crate) fn write_raw(&self, out: &mut String) {
        match self {
            Self::Text(s) | Self::Code(s) | Self::Autolink(_, s) => out.push_str(s),
            Self::Html(s) => {
                out.push('<');
                out.push_str(s);
                out.push('>');
            }
            Self::Emph(t) | Self::Strong(t) | Self::Link(t, ..) | Self::Image(t, ..) => {
                for f in t {
                    f.write_raw(out);
                }
            }
            Self::Delimiter(ch, n, kind) => {
                if kind.contains(DelimiterRunType::IMAGE) {
                    out.push('!');
                }
                push_repeated(out, *ch, *n);
            }
            Self::SoftLineBreak | Self::HardLineBreak => out.push(' '),
        }
    }

    /// Returns `true` for the two line-break variants.
    #[must_use]
    pub const fn is_line_break(&self) -> bool {
        matches!(self, Self::SoftLineBreak | Self::HardLineBreak)
    }
}

fn push_repeated(out: &mut String, ch: char, n: usize) {
    for _ in 0..n {
        out.push(ch);
    }
}

/// Markdown-like rendering, close to the source the fragment came from.
impl fmt::Display for TextFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Code(s) => write!(f, "`{s}`"),
            Self::Emph(t) => write!(f, "*{t}*"),
            Self::Strong(t) => write!(f, "**{t}**"),
            Self::Link(t, uri, title) => {
                write!(f, "[{t}]")?;
                write_target(f, uri.as_deref(), title.as_deref())
            }
            Self::Image(t, uri, title) => {
                write!(f, "![{t}]")?;
                write_target(f, uri.as_deref(), title.as_deref())
            }
            Self::Autolink(_, s) | Self::Html(s) => write!(f, "<{s}>"),
            Self::Delimiter(ch, n, kind) => {
                if kind.contains(DelimiterRunType::IMAGE) {
                    f.write_str("!")?;
                }
                let mut run = String::new();
                push_repeated(&mut run, *ch, *n);
                f.write_str(&run)
            }
            Self::SoftLineBreak => f.write_str("\n"),
            Self::HardLineBreak => f.write_str("  \n"),
        }
    }
}

fn write_target(f: &mut fmt::Formatter<'_>, uri: Option<&str>, title: Option<&str>) -> fmt::Result {
    match (uri, title) {
        (Some(u), Some(t)) => write!(f, "({u} \"{t}\")"),
        (Some(u), None) => write!(f, "({u})"),
        (None, Some(t)) => write!(f, "(\"{t}\")"),
        (None, None) => Ok(()),
    }
}

impl From<&str> for TextFragment {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
