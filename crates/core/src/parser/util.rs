// crates/core/src/parser/util.rs
//! Character classes and small scanners shared by the parsers.

use alloc::string::String;
use core::iter::Peekable;
use core::str::Chars;

/// ASCII whitespace as defined by CommonMark (space, tab, newline, line
/// tabulation, form feed, carriage return).
#[must_use]
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{b}' | '\u{c}')
}

#[must_use]
pub fn is_whitespace_str(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

#[must_use]
pub fn is_unicode_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

#[must_use]
pub const fn is_ascii_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// ASCII punctuation plus the Unicode punctuation blocks that show up in prose.
#[must_use]
pub fn is_unicode_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_punctuation();
    }
    matches!(ch as u32,
        0x00A1 | 0x00A7 | 0x00AB | 0x00B6 | 0x00B7 | 0x00BB | 0x00BF
        | 0x037E | 0x0387
        | 0x055A..=0x055F | 0x0589 | 0x058A
        | 0x05BE | 0x05C0 | 0x05C3 | 0x05C6 | 0x05F3 | 0x05F4
        | 0x060C | 0x060D | 0x061B | 0x061E | 0x061F | 0x066A..=0x066D | 0x06D4
        | 0x0964 | 0x0965 | 0x0970
        | 0x0E4F | 0x0E5A | 0x0E5B
        | 0x2010..=0x2027
        | 0x2030..=0x2043
        | 0x2045..=0x2051
        | 0x2053..=0x205E
        | 0x207D | 0x207E | 0x208D | 0x208E
        | 0x2308..=0x230B | 0x2329 | 0x232A
        | 0x2768..=0x2775 | 0x27C5 | 0x27C6 | 0x27E6..=0x27EF
        | 0x2983..=0x2998 | 0x29D8..=0x29DB | 0x29FC | 0x29FD
        | 0x2E00..=0x2E2E | 0x2E30..=0x2E4F
        | 0x3001..=0x3003 | 0x3008..=0x3011 | 0x3014..=0x301F | 0x3030 | 0x303D
        | 0x30A0 | 0x30FB
        | 0xFE10..=0xFE19 | 0xFE30..=0xFE52 | 0xFE54..=0xFE61 | 0xFE63 | 0xFE68
        | 0xFE6A | 0xFE6B
        | 0xFF01..=0xFF03 | 0xFF05..=0xFF0A | 0xFF0C..=0xFF0F | 0xFF1A | 0xFF1B
        | 0xFF1F | 0xFF20 | 0xFF3B..=0xFF3D | 0xFF3F | 0xFF5B | 0xFF5D
        | 0xFF5F..=0xFF65
    )
}

/// Skips spaces, tabs and other non-newline Unicode whitespace in `s[from..to]`.
#[must_use]
pub fn skip_whitespace(s: &str, from: usize, to: usize) -> usize {
    let mut i = from;
    for ch in s[from..to].chars() {
        if ch == '\n' || ch == '\r' || !ch.is_whitespace() {
            break;
        }
        i += ch.len_utf8();
    }
    i
}

/// Collapses inner whitespace to single spaces, trims and lower-cases a link label.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    let mut collapsed = String::with_capacity(label.len());
    for word in label.split(is_unicode_whitespace).filter(|w| !w.is_empty()) {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    collapsed.to_lowercase()
}

/// Absolute URI as accepted by autolinks: `scheme:rest` with a 2-32
/// character scheme and no whitespace, controls or angle brackets.
#[must_use]
pub fn is_uri(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && (2..=32).contains(&scheme.len());
    valid_scheme
        && rest
            .chars()
            .all(|c| !is_whitespace(c) && !c.is_control() && c != '<' && c != '>')
}

/// Email address as accepted by autolinks.
#[must_use]
pub fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    local_ok && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Whether `s` (the text between `<` and `>`) is valid inline raw HTML.
#[must_use]
pub fn is_html_tag(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    match chars.peek().copied() {
        None => false,
        Some('/') => {
            chars.next();
            skip_tag_name(&mut chars) && {
                skip_spaces(&mut chars);
                chars.peek().is_none()
            }
        }
        Some('?') => s.len() > 1 && s.ends_with('?'),
        Some('!') => is_html_declaration(s),
        Some(_) => is_open_tag(&mut chars),
    }
}

fn is_html_declaration(s: &str) -> bool {
    if let Some(body) = s.strip_prefix("!--") {
        let Some(inner) = body.strip_suffix("--") else {
            return false;
        };
        return body.len() >= 2
            && !inner.starts_with('>')
            && !inner.starts_with("->")
            && !inner.ends_with('-')
            && !inner.contains("--");
    }
    if let Some(body) = s.strip_prefix("![CDATA[") {
        return body
            .strip_suffix("]]")
            .is_some_and(|inner| !inner.contains("]]"));
    }
    s[1..].chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn is_open_tag(chars: &mut Peekable<Chars<'_>>) -> bool {
    if !skip_tag_name(chars) {
        return false;
    }
    let mut separated = skip_spaces(chars);
    loop {
        match chars.peek() {
            None => return true,
            Some('/') => {
                chars.next();
                return chars.peek().is_none();
            }
            Some(_) if separated => match skip_attribute(chars) {
                Some(trailing_space) => separated = trailing_space,
                None => return false,
            },
            Some(_) => return false,
        }
    }
}

/// Skips `name`, `name = value` and reports whether whitespace followed.
fn skip_attribute(chars: &mut Peekable<Chars<'_>>) -> Option<bool> {
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return None,
    }
    while chars
        .peek()
        .is_some_and(|&c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
    {
        chars.next();
    }
    let spaced = skip_spaces(chars);
    if chars.peek() != Some(&'=') {
        return Some(spaced);
    }
    chars.next();
    skip_spaces(chars);
    match chars.next()? {
        quote @ ('\'' | '"') => loop {
            match chars.next() {
                Some(c) if c == quote => break,
                Some(_) => {}
                None => return None,
            }
        },
        c if is_whitespace(c) || matches!(c, '=' | '<' | '>' | '`') => return None,
        _ => {
            while chars.peek().is_some_and(|&c| {
                !is_whitespace(c) && !matches!(c, '"' | '\'' | '=' | '<' | '>' | '`')
            }) {
                chars.next();
            }
        }
    }
    Some(skip_spaces(chars))
}

fn skip_tag_name(chars: &mut Peekable<Chars<'_>>) -> bool {
    if chars.next_if(char::is_ascii_alphabetic).is_none() {
        return false;
    }
    while chars
        .next_if(|c| c.is_ascii_alphanumeric() || *c == '-')
        .is_some()
    {}
    true
}

fn skip_spaces(chars: &mut Peekable<Chars<'_>>) -> bool {
    let mut skipped = false;
    while chars.next_if(|c| is_whitespace(*c)).is_some() {
        skipped = true;
    }
    skipped
}
