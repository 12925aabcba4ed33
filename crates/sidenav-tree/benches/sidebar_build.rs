//! Benchmarks for sidebar building.

use std::fs;
use std::hint::black_box;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sidenav_tree::{OutputFormat, build, format_label, render};

/// Create a docs tree with the given depth and breadth.
fn create_docs_tree(root: &Path, depth: usize, breadth: usize) {
    fn create_level(dir: &Path, current_depth: usize, max_depth: usize, breadth: usize) {
        if current_depth > max_depth {
            return;
        }

        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("index.md"), format!("# Level {current_depth}")).unwrap();

        for i in 0..breadth {
            fs::write(dir.join(format!("{i:02}-page_{i}.md")), "# Page").unwrap();
            fs::write(dir.join(format!("_draft-{i}.md")), "# Draft").unwrap();
            let child_dir = dir.join(format!("{i:02}-section-{i}"));
            create_level(&child_dir, current_depth + 1, max_depth, breadth);
        }
    }

    create_level(root, 0, depth, breadth);
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (depth, breadth) in [(2, 5), (3, 5), (4, 4)] {
        let temp_dir = tempfile::tempdir().unwrap();
        let source_dir = temp_dir.path().join("docs");
        create_docs_tree(&source_dir, depth, breadth);

        group.bench_with_input(
            BenchmarkId::new("tree", format!("d{depth}_b{breadth}")),
            &source_dir,
            |b, dir| b.iter(|| build(dir).unwrap()),
        );
    }

    group.finish();
}

fn bench_format_label(c: &mut Criterion) {
    c.bench_function("format_label", |b| {
        b.iter(|| format_label(black_box("01-lens_ai_test-pilot-overview")));
    });
}

fn bench_render(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().unwrap();
    let source_dir = temp_dir.path().join("docs");
    create_docs_tree(&source_dir, 3, 5);
    let sidebar = build(&source_dir).unwrap();

    let mut group = c.benchmark_group("render");
    group.bench_function("json_pretty", |b| {
        b.iter(|| render(&sidebar, OutputFormat::Json, true).unwrap());
    });
    group.bench_function("yaml", |b| {
        b.iter(|| render(&sidebar, OutputFormat::Yaml, true).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_format_label, bench_render);
criterion_main!(benches);
