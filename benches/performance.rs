//! Performance benchmarks for Stylebook
//!
//! These benchmarks measure the performance of key operations:
//! - Markdown document parsing at different rule counts
//! - Registry registration and duplicate detection
//! - Catalog queries by scope and id
//!
//! ## Running Benchmarks
//!
//! To run all benchmarks:
//! ```bash
//! cargo bench
//! ```
//!
//! To run specific benchmarks:
//! ```bash
//! cargo bench document_parsing
//! cargo bench registry
//! cargo bench catalog_queries
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::path::Path;
use stylebook::loader::parse_document;
use stylebook::rules::{RuleDefinition, RuleSet};
use stylebook::types::{Category, RuleId, Scope, Severity};
use stylebook::StyleCatalog;

/// Generates a style document with the given number of rules
fn generate_document(rule_count: usize) -> String {
    let mut doc = String::from("# Generated style guide\n\nScope: rust\n\n");
    for i in 0..rule_count {
        doc.push_str(&format!(
            "## generated-rule-{i}\n\n\
             Category: naming\n\
             Severity: required\n\n\
             Rationale paragraph for rule number {i}, long enough to look\n\
             like real guidance rather than filler.\n\n\
             ```rust bad\nlet BAD_{i} = 0;\n```\n\n\
             ```rust good\nlet good_{i} = 0;\n```\n\n"
        ));
    }
    doc
}

fn generate_rules(rule_count: usize) -> Vec<RuleDefinition> {
    (0..rule_count)
        .map(|i| {
            RuleDefinition::new(
                RuleId::new(format!("generated-rule-{i}")).unwrap(),
                Scope::Rust,
                Category::new("naming").unwrap(),
                Severity::Required,
                format!("Rationale for rule {i}"),
            )
            .unwrap()
        })
        .collect()
}

fn bench_document_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_parsing");

    for rule_count in [10, 100, 500] {
        let content = generate_document(rule_count);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(rule_count),
            &content,
            |b, content| {
                b.iter(|| {
                    let doc = parse_document(black_box(content), Path::new("rust.md")).unwrap();
                    black_box(doc.rules.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for rule_count in [100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("register_all", rule_count),
            &rule_count,
            |b, &rule_count| {
                b.iter_batched(
                    || generate_rules(rule_count),
                    |rules| {
                        let mut set = RuleSet::new();
                        set.register_all(rules).unwrap();
                        black_box(set.len())
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_catalog_queries(c: &mut Criterion) {
    let mut set = RuleSet::new();
    set.register_all(generate_rules(1000)).unwrap();
    let catalog = StyleCatalog::new(set);

    let mut group = c.benchmark_group("catalog_queries");

    group.bench_function("rules_for", |b| {
        b.iter(|| black_box(catalog.rules_for(black_box("rust")).count()));
    });

    group.bench_function("rules_for_unknown_scope", |b| {
        b.iter(|| black_box(catalog.rules_for(black_box("cobol")).count()));
    });

    group.bench_function("lookup", |b| {
        b.iter(|| black_box(catalog.lookup(black_box("rust"), black_box("generated-rule-500"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_document_parsing,
    bench_registry,
    bench_catalog_queries
);
criterion_main!(benches);
