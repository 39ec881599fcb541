// crates/core/tests/html_tests.rs
use markdown_kit_core::{Flavor, markdown_to_html};

fn html(input: &str) -> String {
    markdown_to_html(input, Flavor::Standard)
}

#[test]
fn paragraphs_and_headings() {
    assert_eq!(html("# Title\n\nText\n"), "<h1>Title</h1>\n<p>Text</p>\n");
    assert_eq!(html("Title\n=====\n"), "<h1>Title</h1>\n");
    assert_eq!(html("Sub\n---\n"), "<h2>Sub</h2>\n");
    assert_eq!(html("###### six ######\n"), "<h6>six</h6>\n");
}

#[test]
fn thematic_break() {
    assert_eq!(html("a\n\n***\n"), "<p>a</p>\n<hr />\n");
    assert_eq!(html("- - -\n"), "<hr />\n");
}

#[test]
fn soft_and_hard_line_breaks() {
    assert_eq!(html("one\ntwo\n"), "<p>one\ntwo</p>\n");
    assert_eq!(html("one  \ntwo\n"), "<p>one<br />\ntwo</p>\n");
}

#[test]
fn blockquote() {
    assert_eq!(
        html("> quoted\n> text\n"),
        "<blockquote>\n<p>quoted\ntext</p>\n</blockquote>\n"
    );
}

#[test]
fn lazy_blockquote_continuation() {
    assert_eq!(
        html("> quoted\ntext\n"),
        "<blockquote>\n<p>quoted\ntext</p>\n</blockquote>\n"
    );
}

#[test]
fn tight_bullet_list() {
    assert_eq!(
        html("- one\n- two\n"),
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
    );
}

#[test]
fn loose_bullet_list() {
    assert_eq!(
        html("- one\n\n- two\n"),
        "<ul>\n<li>\n<p>one</p>\n</li>\n<li>\n<p>two</p>\n</li>\n</ul>\n"
    );
}

#[test]
fn ordered_list_start() {
    assert_eq!(html("1. a\n2. b\n"), "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n");
    assert_eq!(html("7) a\n"), "<ol start=\"7\">\n<li>a</li>\n</ol>\n");
}

#[test]
fn ordered_items_follow_a_lazy_paragraph() {
    assert_eq!(
        html("1. one\n2. two\n3. three\n"),
        "<ol>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ol>\n"
    );
    assert_eq!(
        html("1. a\nb\n2. c\n"),
        "<ol>\n<li>a\nb</li>\n<li>c</li>\n</ol>\n"
    );
    assert_eq!(
        html("- a\nb\n- c\n"),
        "<ul>\n<li>a\nb</li>\n<li>c</li>\n</ul>\n"
    );
}

#[test]
fn ordered_list_inside_bullet_item() {
    assert_eq!(
        html("- x\n  1. a\n  2. b\n"),
        "<ul>\n<li>x\n<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n</li>\n</ul>\n"
    );
}

#[test]
fn empty_item_after_item() {
    assert_eq!(html("- a\n-\n"), "<ul>\n<li>a</li>\n<li></li>\n</ul>\n");
}

#[test]
fn item_paragraph_is_not_interrupted_by_later_number() {
    assert_eq!(html("- a\n  2. b\n"), "<ul>\n<li>a\n2. b</li>\n</ul>\n");
}

#[test]
fn loose_item_with_two_paragraphs() {
    assert_eq!(
        html("- One\n\n  Two\n- Three\n- Four\n"),
        "<ul>\n<li>\n<p>One</p>\n<p>Two</p>\n</li>\n<li>\n<p>Three</p>\n</li>\n\
         <li>\n<p>Four</p>\n</li>\n</ul>\n"
    );
}

#[test]
fn nested_list_keeps_outer_list_tight() {
    assert_eq!(
        html("- foo\n- bar\n    * one\n    * two\n    * three\n- goo\n"),
        "<ul>\n<li>foo</li>\n<li>bar\n<ul>\n<li>one</li>\n<li>two</li>\n\
         <li>three</li>\n</ul>\n</li>\n<li>goo</li>\n</ul>\n"
    );
}

#[test]
fn changing_bullet_starts_new_list() {
    assert_eq!(
        html("- a\n+ b\n"),
        "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn nested_list() {
    assert_eq!(
        html("- a\n  - b\n"),
        "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>\n"
    );
}

#[test]
fn indented_code() {
    assert_eq!(
        html("    let x = 1;\n\n    x < 2\n"),
        "<pre><code>let x = 1;\n\nx &lt; 2\n</code></pre>\n"
    );
}

#[test]
fn fenced_code_with_info() {
    assert_eq!(
        html("```rust\nfn main() {}\n```\n"),
        "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
    );
    assert_eq!(html("~~~\n<b>\n~~~\n"), "<pre><code>&lt;b&gt;\n</code></pre>\n");
}

#[test]
fn unclosed_fence_runs_to_end() {
    assert_eq!(html("```\na\n\nb\n"), "<pre><code>a\n\nb\n</code></pre>\n");
}

#[test]
fn html_block_is_verbatim() {
    assert_eq!(
        html("<div>\n*not emphasis*\n</div>\n"),
        "<div>\n*not emphasis*\n</div>\n"
    );
    assert_eq!(html("<!-- note -->\n"), "<!-- note -->\n");
}

#[test]
fn emphasis_and_strong() {
    assert_eq!(html("*a* **b** _c_ __d__\n"), "<p><em>a</em> <strong>b</strong> <em>c</em> <strong>d</strong></p>\n");
    assert_eq!(html("***both***\n"), "<p><em><strong>both</strong></em></p>\n");
}

#[test]
fn intraword_underscore_is_literal() {
    assert_eq!(html("snake_case_name\n"), "<p>snake_case_name</p>\n");
}

#[test]
fn code_spans() {
    assert_eq!(html("use `a < b`\n"), "<p>use <code>a &lt; b</code></p>\n");
    assert_eq!(html("`` a`b ``\n"), "<p><code>a`b</code></p>\n");
}

#[test]
fn inline_links_and_images() {
    assert_eq!(
        html("[home](/ \"Start\")\n"),
        "<p><a href=\"/\" title=\"Start\">home</a></p>\n"
    );
    assert_eq!(
        html("![alt *text*](a.png)\n"),
        "<p><img src=\"a.png\" alt=\"alt text\"/></p>\n"
    );
}

#[test]
fn reference_links() {
    let input = "[one][ref] [ref][] [ref]\n\n[ref]: /url 'T'\n";
    let link = "<a href=\"/url\" title=\"T\">";
    assert_eq!(
        html(input),
        format!("<p>{link}one</a> {link}ref</a> {link}ref</a></p>\n")
    );
}

#[test]
fn reference_labels_are_case_insensitive() {
    assert_eq!(
        html("[FOO]\n\n[foo]: /x\n"),
        "<p><a href=\"/x\">FOO</a></p>\n"
    );
}

#[test]
fn missing_reference_stays_text() {
    assert_eq!(html("[nothing]\n"), "<p>[nothing]</p>\n");
}

#[test]
fn autolinks() {
    assert_eq!(
        html("<https://example.com>\n"),
        "<p><a href=\"https://example.com\">https://example.com</a></p>\n"
    );
    assert_eq!(
        html("<me@example.com>\n"),
        "<p><a href=\"mailto:me@example.com\">me@example.com</a></p>\n"
    );
}

#[test]
fn inline_html() {
    assert_eq!(html("a <span>b</span>\n"), "<p>a <span>b</span></p>\n");
}

#[test]
fn backslash_escapes() {
    assert_eq!(html("\\*not\\*\n"), "<p>*not*</p>\n");
    assert_eq!(html("\\a\n"), "<p>\\a</p>\n");
}

#[test]
fn entities_are_normalised() {
    assert_eq!(html("&copy; &amp; AT&T\n"), "<p>\u{a9} &amp; AT&amp;T</p>\n");
}

#[test]
fn empty_input() {
    assert_eq!(html(""), "");
    assert_eq!(html("\n\n"), "");
}
