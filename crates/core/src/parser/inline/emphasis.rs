// crates/core/src/parser/inline/emphasis.rs
//! Emphasis and strong emphasis using the delimiter stack algorithm.

use alloc::vec::Vec;

use crate::ast::{DelimiterRunType, Text, TextFragment};
use crate::parser::inline::{InlineTransformer, LinkRefs};

/// Builds the fragment for a matched pair; `strong` is set for double delimiters.
pub type EmphasisFactory = fn(strong: bool, text: Text) -> TextFragment;

/// A character usable for emphasis.
#[derive(Debug, Clone, Copy)]
pub struct Emphasis {
    pub ch: char,
    /// Intraword runs of special characters (`*`) may open and close.
    pub special: bool,
    pub factory: EmphasisFactory,
}

fn emph_or_strong(strong: bool, text: Text) -> TextFragment {
    if strong {
        TextFragment::Strong(text)
    } else {
        TextFragment::Emph(text)
    }
}

/// 強調
#[derive(Debug, Clone)]
pub struct EmphasisTransformer {
    emphasis: Vec<Emphasis>,
}

impl Default for EmphasisTransformer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct Delimiter {
    emphasis: Emphasis,
    run: DelimiterRunType,
    count: usize,
    index: usize,
}

impl Delimiter {
    fn is_opener(&self) -> bool {
        self.run.contains(DelimiterRunType::LEFT_FLANKING)
            && (self.emphasis.special
                || !self.run.contains(DelimiterRunType::RIGHT_FLANKING)
                || self.run.contains(DelimiterRunType::LEFT_PUNCTUATION))
    }

    fn is_closer(&self) -> bool {
        self.run.contains(DelimiterRunType::RIGHT_FLANKING)
            && (self.emphasis.special
                || !self.run.contains(DelimiterRunType::LEFT_FLANKING)
                || self.run.contains(DelimiterRunType::RIGHT_PUNCTUATION))
    }

    /// CommonMark's "rule of three" for runs that can both open and close.
    fn matches(&self, closer: &Self) -> bool {
        self.emphasis.ch == closer.emphasis.ch
            && self.is_opener()
            && ((!closer.is_opener() && !self.is_closer())
                || (closer.count % 3 == 0 && self.count % 3 == 0)
                || (self.count + closer.count) % 3 != 0)
    }

    const fn fragment(&self) -> TextFragment {
        TextFragment::Delimiter(self.emphasis.ch, self.count, self.run)
    }
}

impl EmphasisTransformer {
    /// `*` and `_` producing `Emph` and `Strong`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_emphasis([
            Emphasis {
                ch: '*',
                special: true,
                factory: emph_or_strong,
            },
            Emphasis {
                ch: '_',
                special: false,
                factory: emph_or_strong,
            },
        ])
    }

    #[must_use]
    pub fn with_emphasis(emphasis: impl IntoIterator<Item = Emphasis>) -> Self {
        Self {
            emphasis: emphasis.into_iter().collect(),
        }
    }

    fn lookup(&self, ch: char) -> Option<Emphasis> {
        self.emphasis.iter().copied().find(|e| e.ch == ch)
    }

    fn process(res: &mut Vec<TextFragment>, stack: &mut Vec<Delimiter>) {
        let mut current = 0;
        'closers: while current < stack.len() {
            let closer = stack[current];
            if closer.is_closer() {
                for opener_pos in (0..current).rev() {
                    if !stack[opener_pos].matches(&closer) {
                        continue;
                    }
                    let delta = if stack[opener_pos].count > 1 && closer.count > 1 { 2 } else { 1 };
                    stack[opener_pos].count -= delta;
                    stack[current].count -= delta;
                    let opener = stack[opener_pos];
                    let closer = stack[current];

                    let nested: Text = res[opener.index + 1..closer.index].iter().cloned().collect();
                    let mut range = Vec::with_capacity(3);
                    if opener.count > 0 {
                        range.push(opener.fragment());
                    }
                    range.push((opener.emphasis.factory)(delta > 1, nested));
                    if closer.count > 0 {
                        range.push(closer.fragment());
                    }
                    let inserted = range.len();
                    let removed = closer.index - opener.index + 1;
                    res.splice(opener.index..=closer.index, range);

                    let mut next = opener_pos;
                    if closer.count == 0 {
                        stack.remove(current);
                    }
                    if opener.count == 0 {
                        stack.remove(next);
                        current -= 1;
                    } else {
                        next += 1;
                    }
                    stack.drain(next..current);
                    current = next;
                    for delimiter in &mut stack[next..] {
                        delimiter.index = delimiter.index + inserted - removed;
                    }
                    continue 'closers;
                }
                if !closer.is_opener() {
                    stack.remove(current);
                    continue;
                }
            }
            current += 1;
        }
    }
}

impl InlineTransformer for EmphasisTransformer {
    fn transform(&self, text: Text, refs: &LinkRefs) -> Text {
        let mut res = Vec::with_capacity(text.len());
        let mut stack = Vec::new();
        for fragment in text {
            if let TextFragment::Delimiter(ch, count, run) = fragment
                && let Some(emphasis) = self.lookup(ch)
            {
                stack.push(Delimiter {
                    emphasis,
                    run,
                    count,
                    index: res.len(),
                });
                res.push(fragment);
            } else {
                let mut out = Text::new();
                self.transform_fragment(fragment, refs, &mut out);
                res.extend(out);
            }
        }
        Self::process(&mut res, &mut stack);
        Text::from(res)
    }
}
