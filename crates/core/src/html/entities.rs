// crates/core/src/html/entities.rs
//! HTML character references.

use alloc::borrow::Cow;
use alloc::string::String;

/// Longest entity name we try to decode, including `&` and `;`.
const MAX_REFERENCE_LENGTH: usize = 32;

/// Named character references, sorted by name.
static NAMED_CHARACTERS: &[(&str, &str)] = &[
    ("AElig", "\u{c6}"),
    ("Aacute", "\u{c1}"),
    ("Agrave", "\u{c0}"),
    ("Auml", "\u{c4}"),
    ("ClockwiseContourIntegral", "\u{2232}"),
    ("Dcaron", "\u{10e}"),
    ("DifferentialD", "\u{2146}"),
    ("Eacute", "\u{c9}"),
    ("HilbertSpace", "\u{210b}"),
    ("Ntilde", "\u{d1}"),
    ("Ouml", "\u{d6}"),
    ("Uuml", "\u{dc}"),
    ("aacute", "\u{e1}"),
    ("aelig", "\u{e6}"),
    ("agrave", "\u{e0}"),
    ("alpha", "\u{3b1}"),
    ("amp", "&"),
    ("apos", "'"),
    ("auml", "\u{e4}"),
    ("beta", "\u{3b2}"),
    ("bull", "\u{2022}"),
    ("ccedil", "\u{e7}"),
    ("cent", "\u{a2}"),
    ("copy", "\u{a9}"),
    ("darr", "\u{2193}"),
    ("deg", "\u{b0}"),
    ("delta", "\u{3b4}"),
    ("divide", "\u{f7}"),
    ("eacute", "\u{e9}"),
    ("egrave", "\u{e8}"),
    ("euro", "\u{20ac}"),
    ("frac12", "\u{bd}"),
    ("frac14", "\u{bc}"),
    ("frac34", "\u{be}"),
    ("gamma", "\u{3b3}"),
    ("ge", "\u{2265}"),
    ("gt", ">"),
    ("hArr", "\u{21d4}"),
    ("harr", "\u{2194}"),
    ("hellip", "\u{2026}"),
    ("iexcl", "\u{a1}"),
    ("infin", "\u{221e}"),
    ("iquest", "\u{bf}"),
    ("lArr", "\u{21d0}"),
    ("lambda", "\u{3bb}"),
    ("laquo", "\u{ab}"),
    ("larr", "\u{2190}"),
    ("ldquo", "\u{201c}"),
    ("le", "\u{2264}"),
    ("lsquo", "\u{2018}"),
    ("lt", "<"),
    ("mdash", "\u{2014}"),
    ("middot", "\u{b7}"),
    ("mu", "\u{3bc}"),
    ("nbsp", "\u{a0}"),
    ("ndash", "\u{2013}"),
    ("ne", "\u{2260}"),
    ("ngE", "\u{2267}\u{338}"),
    ("ntilde", "\u{f1}"),
    ("ouml", "\u{f6}"),
    ("para", "\u{b6}"),
    ("pi", "\u{3c0}"),
    ("plusmn", "\u{b1}"),
    ("pound", "\u{a3}"),
    ("quot", "\""),
    ("rArr", "\u{21d2}"),
    ("raquo", "\u{bb}"),
    ("rarr", "\u{2192}"),
    ("rdquo", "\u{201d}"),
    ("reg", "\u{ae}"),
    ("rsquo", "\u{2019}"),
    ("sect", "\u{a7}"),
    ("shy", "\u{ad}"),
    ("sigma", "\u{3c3}"),
    ("sum", "\u{2211}"),
    ("szlig", "\u{df}"),
    ("times", "\u{d7}"),
    ("trade", "\u{2122}"),
    ("uarr", "\u{2191}"),
    ("uuml", "\u{fc}"),
    ("yen", "\u{a5}"),
];

/// Encodes the five XML special characters `" & ' < >`.
#[must_use]
pub fn encode_predefined_xml_entities(s: &str) -> Cow<'_, str> {
    if !s.contains(['"', '&', '\'', '<', '>']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Replaces named (`&copy;`) and numeric (`&#169;`, `&#xA9;`) character
/// references by the characters they denote. Unknown references are kept.
#[must_use]
pub fn decode_named_characters(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .bytes()
            .take(MAX_REFERENCE_LENGTH)
            .position(|b| b == b';')
            .and_then(|semi| decode_reference(&rest[1..semi]).map(|c| (c, semi + 1)));
        match decoded {
            Some((replacement, consumed)) => {
                out.push_str(&replacement);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decodes the body of a reference, i.e. the text between `&` and `;`.
fn decode_reference(body: &str) -> Option<Cow<'static, str>> {
    if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) if (1..=6).contains(&hex.len()) => u32::from_str_radix(hex, 16).ok()?,
            Some(_) => return None,
            None if (1..=7).contains(&number.len()) => number.parse().ok()?,
            None => return None,
        };
        let ch = match char::from_u32(code) {
            Some(ch) if code != 0 => ch,
            _ => char::REPLACEMENT_CHARACTER,
        };
        let mut s = String::new();
        s.push(ch);
        return Some(Cow::Owned(s));
    }
    NAMED_CHARACTERS
        .binary_search_by(|(name, _)| name.cmp(&body))
        .ok()
        .map(|i| Cow::Borrowed(NAMED_CHARACTERS[i].1))
}
