use criterion::{Criterion, criterion_group, criterion_main};
use markdown_kit_core::{HtmlGenerator, MarkdownParser};
use std::hint::black_box;

const SAMPLE: &str = "# Heading\n\nSome *emphasis*, **strong** text and `code`.\n\n\
- item one\n- item [two](https://example.com \"title\")\n  - nested\n\n\
> quoted paragraph\n> continues\n\n```rust\nfn main() {}\n```\n\n\
| a | b |\n|---|:-:|\n| 1 | 2 |\n\n[ref]: /url\n";

fn benchmark_parse(c: &mut Criterion) {
    let input = SAMPLE.repeat(50);
    let standard = MarkdownParser::standard();
    let extended = MarkdownParser::extended();

    c.bench_function("parse_standard", |b| {
        b.iter(|| black_box(standard.parse(black_box(&input))));
    });
    c.bench_function("parse_extended", |b| {
        b.iter(|| black_box(extended.parse(black_box(&input))));
    });

    let doc = standard.parse(&input);
    c.bench_function("generate_html", |b| {
        b.iter(|| black_box(HtmlGenerator::new().generate(black_box(&doc))));
    });
}

criterion_group!(benches, benchmark_parse);
criterion_main!(benches);
