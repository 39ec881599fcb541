// crates/core/tests/extended_tests.rs
use markdown_kit_core::ast::{Alignment, Block, ListType};
use markdown_kit_core::{Flavor, MarkdownParser, markdown_to_html};

fn extended(input: &str) -> Vec<Block> {
    match MarkdownParser::extended().parse(input) {
        Block::Document(blocks) => blocks,
        other => panic!("expected a document, got {other:?}"),
    }
}

#[test]
fn table_structure() {
    let parsed = extended("| a | b |\n|:--|--:|\n| 1 | 2 |\n| 3 |\n");
    let Block::Table {
        header,
        alignments,
        rows,
    } = &parsed[0]
    else {
        panic!("expected a table, got {parsed:?}");
    };
    assert_eq!(header.len(), 2);
    assert_eq!(alignments, &vec![Alignment::Left, Alignment::Right]);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.len() == 2));
    assert!(rows[1][1].is_empty());
}

#[test]
fn table_html() {
    assert_eq!(
        markdown_to_html("| a | b |\n|---|:-:|\n| 1 | *2* |\n", Flavor::Extended),
        "<table><thead><tr>\n<th>a</th><th align=\"center\">b</th>\n</tr></thead><tbody>\n\
         <tr><td>1</td><td align=\"center\"><em>2</em></td></tr>\n</tbody></table>\n"
    );
}

#[test]
fn header_and_delimiter_must_agree() {
    let parsed = extended("| a | b |\n|---|\n");
    assert!(matches!(&parsed[0], Block::Paragraph(_)));
}

#[test]
fn standard_flavor_has_no_tables() {
    let parsed = match MarkdownParser::standard().parse("| a |\n|---|\n") {
        Block::Document(blocks) => blocks,
        _ => unreachable!(),
    };
    assert!(parsed.iter().all(|block| !matches!(block, Block::Table { .. })));
}

#[test]
fn definition_list() {
    let parsed = extended("Term\n: First\n: Second\n");
    let Block::DefinitionList(definitions) = &parsed[0] else {
        panic!("expected a definition list, got {parsed:?}");
    };
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].item.raw_string(), "Term");
    assert_eq!(definitions[0].descriptions.len(), 2);
    assert!(matches!(
        &definitions[0].descriptions[0],
        Block::ListItem { kind: ListType::Bullet(':'), .. }
    ));
}

#[test]
fn definition_list_html() {
    assert_eq!(
        markdown_to_html("Apple\n: A *fruit*\n", Flavor::Extended),
        "<dl>\n<dt>Apple</dt>\n<dd>A <em>fruit</em></dd>\n</dl>\n"
    );
}

#[test]
fn colon_list_without_term_stays_a_list() {
    let parsed = extended(": alone\n");
    assert!(matches!(&parsed[0], Block::List { .. }));
}
