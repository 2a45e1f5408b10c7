//! Benchmarks for navigation tree operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_nav::{Document, NavConfig, build_nav, find_entry_path, flatten, localize, published};

/// Create a document collection with specified depth and breadth.
///
/// Every directory gets an `index.md`; the `ja` tree mirrors the root.
fn create_documents(depth: usize, breadth: usize) -> Vec<Document> {
    fn create_level(prefix: &str, depth: usize, max_depth: usize, breadth: usize, out: &mut Vec<Document>) {
        if depth > max_depth {
            return;
        }
        for i in 0..breadth {
            let dir = if prefix.is_empty() {
                format!("{i:02}-section")
            } else {
                format!("{prefix}/{i:02}-section")
            };
            out.push(Document::new(format!("{dir}/index.md"), format!("Section {i}")));
            out.push(Document::new(format!("{dir}/page.md"), format!("Page {i}")));
            create_level(&dir, depth + 1, max_depth, breadth, out);
        }
    }

    let mut documents = Vec::new();
    create_level("", 1, depth, breadth, &mut documents);
    create_level("ja", 1, depth, breadth, &mut documents);
    documents
}

fn config() -> NavConfig {
    NavConfig {
        locales: vec!["ja".to_owned()],
        ..NavConfig::default()
    }
}

fn bench_build_nav(c: &mut Criterion) {
    let config = config();
    let mut group = c.benchmark_group("build_nav");

    for (depth, breadth) in [(2, 5), (3, 5), (4, 4)] {
        let documents = create_documents(depth, breadth);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}_b{breadth}")),
            &documents,
            |b, documents| {
                b.iter(|| build_nav(documents.clone(), &config, published).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let nav = build_nav(create_documents(4, 4), &config(), published).unwrap();
    let mut group = c.benchmark_group("traversal");

    group.bench_function("flatten", |b| b.iter(|| flatten(&nav)));

    group.bench_function("find_entry_path_hit", |b| {
        b.iter(|| find_entry_path(&nav, "03-section/03-section/03-section/page.md"))
    });

    group.bench_function("find_entry_path_miss", |b| {
        b.iter(|| find_entry_path(&nav, "nonexistent/path.md"))
    });

    group.bench_function("localize_ja", |b| b.iter(|| localize(&nav, "docs", Some("ja"))));

    group.finish();
}

criterion_group!(benches, bench_build_nav, bench_traversal);
criterion_main!(benches);
