// crates/core/src/parser/document.rs
//! Line based block structure parser.
//!
//! The parser keeps a stack of open containers (document, block quotes and
//! list items). For every input line each open container strips its prefix;
//! the deepest container that accepts the line is the line's *matched*
//! depth. Block parsers then run against the remaining content.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::{Block, Blocks, Definition, ListType, Text};

use super::block_parser::{BlockParser, ContainerKind, Parsed};

/// Position of the parser within the input.
///
/// Snapshots of this cursor are used to undo speculative parsing; the
/// container stack is never modified while reading lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCursor {
    next: usize,
    line_start: usize,
    content_start: usize,
    content_end: usize,
    line_end: usize,
    indent: usize,
    empty: bool,
    prev_empty: bool,
    marker_only: bool,
    matched: usize,
    finished: bool,
}

#[derive(Debug)]
struct Container {
    kind: Option<ContainerKind>,
    content: Blocks,
    after_blank: bool,
    pending_blank: bool,
    loose: bool,
}

impl Container {
    const fn document() -> Self {
        Self {
            kind: None,
            content: Vec::new(),
            after_blank: false,
            pending_blank: false,
            loose: false,
        }
    }

    const fn new(kind: ContainerKind, after_blank: bool) -> Self {
        Self {
            kind: Some(kind),
            content: Vec::new(),
            after_blank,
            pending_blank: false,
            loose: false,
        }
    }

    /// Skips the container's line prefix starting at `start`.
    fn skip_indent(&self, input: &str, start: usize, end: usize) -> Option<usize> {
        let bytes = input.as_bytes();
        let mut i = start;
        match self.kind {
            None => Some(start),
            Some(ContainerKind::Blockquote) => {
                let mut spaces = 0;
                while i < end && bytes[i] == b' ' && spaces < 3 {
                    i += 1;
                    spaces += 1;
                }
                if i < end && bytes[i] == b'>' {
                    i += 1;
                    if i < end && (bytes[i] == b' ' || bytes[i] == b'\t') {
                        i += 1;
                    }
                    Some(i)
                } else {
                    None
                }
            }
            Some(ContainerKind::ListItem { indent, .. }) => {
                let mut columns = 0;
                while i < end && columns < indent {
                    match bytes[i] {
                        b' ' => columns += 1,
                        b'\t' => columns += 4,
                        _ => break,
                    }
                    i += 1;
                }
                (columns >= indent).then_some(i)
            }
        }
    }

    /// Block quotes need their marker on every line, even blank ones.
    const fn indent_required(&self) -> bool {
        matches!(self.kind, Some(ContainerKind::Blockquote))
    }

    const fn is_list_item(&self) -> bool {
        matches!(self.kind, Some(ContainerKind::ListItem { .. }))
    }

    /// Records that a new child starts; a preceding blank line makes the item loose.
    fn note_child(&mut self, continues_list: bool) {
        if self.pending_blank {
            if !self.content.is_empty() && !continues_list {
                self.loose = true;
            }
            self.pending_blank = false;
        }
    }

    fn into_block(self, definition_lists: bool) -> Block {
        let blocks = bundle(self.content, definition_lists);
        match self.kind {
            None => Block::Document(blocks),
            Some(ContainerKind::Blockquote) => Block::Blockquote(blocks),
            Some(ContainerKind::ListItem { kind, .. }) => Block::ListItem {
                kind,
                tight: !self.after_blank && !self.loose,
                blocks,
            },
        }
    }
}

/// Parses the block structure of a single input string.
pub struct DocumentParser<'a> {
    input: &'a str,
    cursor: LineCursor,
    containers: Vec<Container>,
    paragraph: Option<Text>,
    depth_limit: Option<usize>,
    definition_lists: bool,
}

impl<'a> DocumentParser<'a> {
    #[must_use]
    pub fn new(input: &'a str, definition_lists: bool) -> Self {
        Self {
            input,
            cursor: LineCursor::default(),
            containers: alloc::vec![Container::document()],
            paragraph: None,
            depth_limit: None,
            definition_lists,
        }
    }

    /// Runs `parsers` over the whole input and returns a `Block::Document`.
    pub fn parse(mut self, parsers: &[Box<dyn BlockParser>]) -> Block {
        self.read_next_line();
        while !self.cursor.finished {
            if self.cursor.empty {
                if !self.cursor.marker_only {
                    self.close_unmatched_quotes();
                    self.note_blank_line();
                }
                self.read_next_line();
                continue;
            }
            self.close_to(self.cursor.matched);
            match self.try_parsers(parsers, false) {
                Some(Parsed::Block(block)) => self.push_block(block),
                Some(Parsed::Container(kind)) => self.open(kind),
                None => self.parse_paragraph(parsers),
            }
        }
        self.close_to(0);
        let root = self.containers.pop().unwrap_or_else(Container::document);
        log::debug!("parsed document with {} top-level blocks", root.content.len());
        root.into_block(self.definition_lists)
    }

    fn try_parsers(&mut self, parsers: &[Box<dyn BlockParser>], interrupting: bool) -> Option<Parsed> {
        // An interrupting block lives at the depth matched by its first line,
        // so the lines it consumes are only matched against containers up to there.
        if interrupting {
            self.depth_limit = Some(self.cursor.matched);
        }
        let parsed = parsers
            .iter()
            .filter(|parser| !interrupting || parser.may_interrupt_paragraph())
            .find_map(|parser| parser.parse(self));
        self.depth_limit = None;
        parsed
    }

    fn open_depth(&self) -> usize {
        self.depth_limit.unwrap_or(self.containers.len() - 1)
    }

    fn parse_paragraph(&mut self, parsers: &[Box<dyn BlockParser>]) {
        let mut text = Text::new();
        text.push_line(self.trimmed_line(), self.has_hard_line_break());
        self.read_next_line();
        while !self.cursor.finished && !self.cursor.empty {
            let depth = self.cursor.matched;
            self.paragraph = Some(text);
            let parsed = self.try_parsers(parsers, true);
            let pending = self.paragraph.take();
            match (parsed, pending) {
                (Some(parsed), pending) => {
                    if let Some(pending) = pending {
                        self.push_block(Block::Paragraph(pending.finalized()));
                    }
                    self.close_to(depth);
                    match parsed {
                        Parsed::Block(block) => self.push_block(block),
                        Parsed::Container(kind) => self.open(kind),
                    }
                    return;
                }
                (None, Some(pending)) => {
                    text = pending;
                    text.push_line(self.trimmed_line(), self.has_hard_line_break());
                    self.read_next_line();
                }
                (None, None) => return,
            }
        }
        self.push_block(Block::Paragraph(text.finalized()));
    }

    fn push_block(&mut self, block: Block) {
        log::trace!("block {block:?}");
        if let Some(container) = self.containers.last_mut() {
            container.note_child(false);
            container.content.push(block);
        }
    }

    fn open(&mut self, kind: ContainerKind) {
        let prev_empty = self.cursor.prev_empty;
        if let Some(parent) = self.containers.last_mut() {
            let continues_list = match kind {
                ContainerKind::ListItem { kind, .. } => continues_list(&parent.content, kind),
                ContainerKind::Blockquote => false,
            };
            parent.note_child(continues_list);
            self.containers
                .push(Container::new(kind, continues_list && prev_empty));
        }
        self.cursor.matched = self.containers.len() - 1;
        if self.cursor.empty {
            self.cursor.marker_only = true;
        }
    }

    /// Closes all containers deeper than `depth`.
    fn close_to(&mut self, depth: usize) {
        while self.containers.len() > depth + 1 {
            let Some(container) = self.containers.pop() else {
                break;
            };
            let block = container.into_block(self.definition_lists);
            if let Some(parent) = self.containers.last_mut() {
                parent.content.push(block);
            }
        }
    }

    /// On a blank line, closes the outermost unmatched block quote and everything inside it.
    fn close_unmatched_quotes(&mut self) {
        let open = self.containers.len() - 1;
        if let Some(depth) =
            (self.cursor.matched + 1..=open).find(|&d| self.containers[d].indent_required())
        {
            self.close_to(depth - 1);
        }
    }

    fn note_blank_line(&mut self) {
        for container in self.containers.iter_mut().filter(|c| c.is_list_item()) {
            container.pending_blank = true;
        }
    }

    // ---- line access for block parsers ----

    /// Advances to the next input line and matches it against the open containers.
    pub fn read_next_line(&mut self) {
        let len = self.input.len();
        self.cursor.prev_empty = self.cursor.empty && !self.cursor.marker_only;
        self.cursor.marker_only = false;
        if self.cursor.next >= len || self.cursor.finished {
            self.cursor = LineCursor {
                next: len,
                line_start: len,
                content_start: len,
                content_end: len,
                line_end: len,
                indent: 0,
                empty: true,
                prev_empty: self.cursor.prev_empty,
                marker_only: false,
                matched: 0,
                finished: true,
            };
            return;
        }
        let bytes = self.input.as_bytes();
        let start = self.cursor.next;
        let mut end = start;
        while end < len && bytes[end] != b'\n' && bytes[end] != b'\r' {
            end += 1;
        }
        let next = match bytes.get(end) {
            Some(b'\r') if bytes.get(end + 1) == Some(&b'\n') => end + 2,
            Some(_) => end + 1,
            None => end,
        };
        self.cursor.next = next;
        self.cursor.line_end = next;
        self.cursor.content_end = end;
        let (matched, line_start) = self.match_containers(start, end);
        self.cursor.matched = matched;
        self.reset_line_start(line_start);
    }

    fn match_containers(&self, start: usize, end: usize) -> (usize, usize) {
        let mut pos = start;
        let mut matched = 0;
        let open = self.open_depth();
        for (depth, container) in self.containers.iter().enumerate().take(open + 1).skip(1) {
            match container.skip_indent(self.input, pos, end) {
                Some(next) => {
                    pos = next;
                    matched = depth;
                }
                None => break,
            }
        }
        (matched, pos)
    }

    /// Moves the start of the current line to `start` and recomputes its indentation.
    pub fn reset_line_start(&mut self, start: usize) {
        let bytes = self.input.as_bytes();
        let c = &mut self.cursor;
        c.line_start = start;
        c.content_start = start;
        c.indent = 0;
        c.empty = true;
        while c.content_start < c.content_end {
            match bytes[c.content_start] {
                b' ' => c.indent += 1,
                b'\t' => c.indent += 4,
                _ => {
                    c.empty = false;
                    break;
                }
            }
            c.content_start += 1;
        }
    }

    /// The complete input.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Current line after container prefixes, including its terminator.
    #[must_use]
    pub fn line(&self) -> &'a str {
        &self.input[self.cursor.line_start..self.cursor.line_end]
    }

    /// Current line without leading whitespace and terminator.
    #[must_use]
    pub fn content(&self) -> &'a str {
        &self.input[self.cursor.content_start..self.cursor.content_end]
    }

    /// Offset of [`content`](Self::content) within [`input`](Self::input).
    #[must_use]
    pub const fn content_start(&self) -> usize {
        self.cursor.content_start
    }

    #[must_use]
    pub const fn content_end(&self) -> usize {
        self.cursor.content_end
    }

    /// Indentation in columns of the current line.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.cursor.indent
    }

    #[must_use]
    pub const fn short_line_indent(&self) -> bool {
        self.cursor.indent < 4
    }

    #[must_use]
    pub const fn line_empty(&self) -> bool {
        self.cursor.empty
    }

    #[must_use]
    pub const fn prev_line_empty(&self) -> bool {
        self.cursor.prev_empty
    }

    #[must_use]
    pub const fn finished(&self) -> bool {
        self.cursor.finished
    }

    /// The current line did not match all open containers.
    #[must_use]
    pub fn lazy_continuation(&self) -> bool {
        self.cursor.matched + 1 < self.containers.len()
    }

    /// Whether the current line still belongs to the innermost open container.
    ///
    /// Blank lines continue list items but not block quotes.
    #[must_use]
    pub fn continues_container(&self) -> bool {
        if self.cursor.finished {
            return false;
        }
        let open = self.open_depth();
        if !self.cursor.empty {
            return self.cursor.matched >= open;
        }
        self.containers
            .iter()
            .take(open + 1)
            .skip(self.cursor.matched + 1)
            .all(|c| !c.indent_required())
    }

    /// Content with trailing whitespace removed.
    #[must_use]
    pub fn trimmed_line(&self) -> &'a str {
        self.content().trim_end_matches([' ', '\t'])
    }

    /// Two or more trailing spaces end the line with a hard break.
    #[must_use]
    pub fn has_hard_line_break(&self) -> bool {
        self.content().ends_with("  ")
    }

    /// The current line with up to `columns` columns of indentation removed.
    #[must_use]
    pub fn format_indented_line(&self, columns: usize) -> String {
        let bytes = self.input.as_bytes();
        let mut i = self.cursor.line_start;
        let mut indent = 0;
        while i < self.cursor.content_start && indent < columns {
            indent += if bytes[i] == b'\t' { 4 } else { 1 };
            i += 1;
        }
        let mut line = String::new();
        for _ in columns..indent {
            line.push(' ');
        }
        line.push_str(&self.input[i..self.cursor.line_end]);
        line
    }

    /// Whether a paragraph is waiting to be continued or interrupted.
    #[must_use]
    pub const fn has_paragraph(&self) -> bool {
        self.paragraph.is_some()
    }

    /// Takes the pending paragraph, e.g. to turn it into a setext heading.
    pub fn take_paragraph(&mut self) -> Option<Text> {
        self.paragraph.take()
    }

    #[must_use]
    pub const fn snapshot(&self) -> LineCursor {
        self.cursor
    }

    pub fn restore(&mut self, cursor: LineCursor) {
        self.cursor = cursor;
    }

    /// Runs `f` and rewinds the line cursor if it fails.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.snapshot();
        let result = f(self);
        if result.is_none() {
            self.restore(saved);
        }
        result
    }
}

fn continues_list(content: &[Block], kind: ListType) -> bool {
    matches!(content.last(), Some(Block::ListItem { kind: prev, .. }) if prev.compatible(&kind))
}

/// Groups consecutive compatible list items into lists.
///
/// With `definition_lists`, a paragraph followed by a list of `:` items
/// additionally becomes a definition.
#[must_use]
pub fn bundle(blocks: Blocks, definition_lists: bool) -> Blocks {
    let mut res = Vec::with_capacity(blocks.len());
    let mut list: Option<(ListType, bool, Blocks)> = None;
    for block in blocks {
        match block {
            Block::ListItem {
                kind,
                tight,
                blocks,
            } => {
                let item = Block::ListItem {
                    kind,
                    tight,
                    blocks,
                };
                match &mut list {
                    Some((first, list_tight, items)) if first.compatible(&kind) => {
                        *list_tight &= tight;
                        items.push(item);
                    }
                    _ => {
                        flush_list(&mut list, &mut res);
                        list = Some((kind, tight, alloc::vec![item]));
                    }
                }
            }
            other => {
                flush_list(&mut list, &mut res);
                res.push(other);
            }
        }
    }
    flush_list(&mut list, &mut res);
    if definition_lists {
        bundle_definitions(res)
    } else {
        res
    }
}

fn flush_list(list: &mut Option<(ListType, bool, Blocks)>, res: &mut Blocks) {
    if let Some((kind, tight, items)) = list.take() {
        res.push(Block::List {
            start: kind.start_number(),
            tight,
            items,
        });
    }
}

fn is_description_list(block: Option<&Block>) -> bool {
    match block {
        Some(Block::List { items, .. }) => matches!(
            items.first(),
            Some(Block::ListItem {
                kind: ListType::Bullet(':'),
                ..
            })
        ),
        _ => false,
    }
}

fn bundle_definitions(blocks: Blocks) -> Blocks {
    let mut res = Vec::with_capacity(blocks.len());
    let mut definitions: Vec<Definition> = Vec::new();
    let mut iter = blocks.into_iter().peekable();
    while let Some(block) = iter.next() {
        if let Block::Paragraph(item) = block {
            if is_description_list(iter.peek()) {
                if let Some(Block::List { items, .. }) = iter.next() {
                    definitions.push(Definition {
                        item,
                        descriptions: items,
                    });
                }
                continue;
            }
            flush_definitions(&mut definitions, &mut res);
            res.push(Block::Paragraph(item));
        } else {
            flush_definitions(&mut definitions, &mut res);
            res.push(block);
        }
    }
    flush_definitions(&mut definitions, &mut res);
    res
}

fn flush_definitions(definitions: &mut Vec<Definition>, res: &mut Blocks) {
    if !definitions.is_empty() {
        res.push(Block::DefinitionList(core::mem::take(definitions)));
    }
}
