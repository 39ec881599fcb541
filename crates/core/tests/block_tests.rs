// crates/core/tests/block_tests.rs
use markdown_kit_core::ast::{Block, ListType, Text, TextFragment};
use markdown_kit_core::MarkdownParser;

fn blocks(input: &str) -> Vec<Block> {
    match MarkdownParser::standard().parse_blocks(input) {
        Block::Document(blocks) => blocks,
        other => panic!("expected a document, got {other:?}"),
    }
}

#[test]
fn paragraph_keeps_raw_lines() {
    let parsed = blocks("first *line*\nsecond\n");
    assert_eq!(
        parsed,
        vec![Block::Paragraph(Text::from_fragments(vec![
            TextFragment::from("first *line*"),
            TextFragment::SoftLineBreak,
            TextFragment::from("second"),
        ]))]
    );
}

#[test]
fn atx_heading_levels() {
    let parsed = blocks("# one\n## two ##\n####### seven\n");
    assert!(matches!(&parsed[0], Block::Heading { level: 1, text } if text.raw_string() == "one"));
    assert!(matches!(&parsed[1], Block::Heading { level: 2, text } if text.raw_string() == "two"));
    assert!(matches!(&parsed[2], Block::Paragraph(_)));
}

#[test]
fn setext_heading_takes_whole_paragraph() {
    let parsed = blocks("line one\nline two\n---\n");
    assert_eq!(parsed.len(), 1);
    assert!(matches!(&parsed[0], Block::Heading { level: 2, text } if text.raw_string() == "line one line two"));
}

#[test]
fn code_lines_keep_terminators() {
    let parsed = blocks("```\na\n  b\n```\n");
    assert_eq!(
        parsed,
        vec![Block::FencedCode {
            info: None,
            lines: vec!["a\n".into(), "  b\n".into()],
        }]
    );
}

#[test]
fn fence_indentation_is_removed_from_content() {
    let parsed = blocks("  ```sh\n  ls\n    pwd\n  ```\n");
    assert_eq!(
        parsed,
        vec![Block::FencedCode {
            info: Some("sh".into()),
            lines: vec!["ls\n".into(), "  pwd\n".into()],
        }]
    );
}

#[test]
fn indented_code_cannot_interrupt_paragraph() {
    let parsed = blocks("text\n    more\n");
    assert_eq!(parsed.len(), 1);
    assert!(matches!(&parsed[0], Block::Paragraph(_)));
}

#[test]
fn reference_definition_block() {
    let parsed = blocks("[Foo Bar]: <my url> \"title\"\n");
    assert_eq!(
        parsed,
        vec![Block::ReferenceDef {
            label: "Foo Bar".into(),
            destination: "my url".into(),
            title: vec!["title".into()],
        }]
    );
}

#[test]
fn invalid_reference_definition_is_paragraph() {
    let parsed = blocks("[foo]: /url \"title\" trailing\n");
    assert!(matches!(&parsed[0], Block::Paragraph(_)));
}

#[test]
fn list_items_carry_their_marker() {
    let parsed = blocks("3. a\n4. b\n");
    let Block::List { start, tight, items } = &parsed[0] else {
        panic!("expected a list");
    };
    assert_eq!(*start, Some(3));
    assert!(*tight);
    assert!(matches!(&items[1], Block::ListItem { kind: ListType::Ordered(4, '.'), .. }));
}

#[test]
fn ordered_item_must_start_at_one_to_interrupt() {
    let parsed = blocks("text\n2. no list\n");
    assert_eq!(parsed.len(), 1);
    let parsed = blocks("text\n1. list\n");
    assert_eq!(parsed.len(), 2);
}

#[test]
fn sibling_items_after_lazy_lines() {
    let parsed = blocks("1. a\nlazy\n2. b\n-\n");
    let Block::List { start, tight, items } = &parsed[0] else {
        panic!("expected a list");
    };
    assert_eq!(*start, Some(1));
    assert!(*tight);
    assert_eq!(items.len(), 2);
    assert!(matches!(&items[0], Block::ListItem { blocks, .. } if blocks.len() == 1));
    assert!(matches!(
        &parsed[1],
        Block::List { items, .. }
            if matches!(&items[0], Block::ListItem { kind: ListType::Bullet('-'), blocks, .. } if blocks.is_empty())
    ));
}

#[test]
fn blank_line_between_children_makes_item_loose() {
    let parsed = blocks("- a\n\n  b\n");
    let Block::List { tight, items, .. } = &parsed[0] else {
        panic!("expected a list");
    };
    assert!(!tight);
    assert!(matches!(&items[0], Block::ListItem { blocks, .. } if blocks.len() == 2));
}

#[test]
fn blockquote_nesting() {
    let parsed = blocks("> > deep\n> shallow\n");
    let Block::Blockquote(outer) = &parsed[0] else {
        panic!("expected a block quote");
    };
    assert!(matches!(&outer[0], Block::Blockquote(inner) if inner.len() == 1));
}

#[test]
fn html_block_kinds() {
    let parsed = blocks("<script>\nlet a;\n\n</script>\nafter\n");
    assert_eq!(
        parsed[0],
        Block::HtmlBlock(vec![
            "<script>\n".into(),
            "let a;\n".into(),
            "\n".into(),
            "</script>\n".into(),
        ])
    );
    assert!(matches!(&parsed[1], Block::Paragraph(_)));
}

#[test]
fn complete_tag_cannot_interrupt_paragraph() {
    let parsed = blocks("text\n<custom-tag>\n");
    assert_eq!(parsed.len(), 1);
}

#[test]
fn plain_text_of_document() {
    let doc = MarkdownParser::standard().parse("# Title\n\n- *one*\n- two\n\n[x]: /y\n");
    assert_eq!(doc.plain_text(), "Title\none\ntwo");
}

#[test]
fn ast_serializes_with_snake_case_tags() {
    let doc = MarkdownParser::standard().parse("## Hi\n\n---\n");
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "document": [
                { "heading": { "level": 2, "text": [{ "text": "Hi" }] } },
                "thematic_break"
            ]
        })
    );
    let back: Block = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
}
