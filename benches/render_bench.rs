use criterion::{Criterion, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::tempdir;
use treedump::render::{RenderOptions, render_with};

fn create_test_tree(root: &Path, depth: usize, dirs_per_level: usize, files_per_dir: usize) {
    fs::create_dir_all(root).unwrap();
    for i in 0..files_per_dir {
        fs::write(root.join(format!("file_{}.txt", i)), b"").unwrap();
    }
    if depth == 0 {
        return;
    }
    for i in 0..dirs_per_level {
        create_test_tree(
            &root.join(format!("dir_{}", i)),
            depth - 1,
            dirs_per_level,
            files_per_dir,
        );
    }
}

fn benchmark_render(c: &mut Criterion) {
    let dir = tempdir().unwrap();

    let small = dir.path().join("small");
    create_test_tree(&small, 2, 3, 5);

    let large = dir.path().join("large");
    create_test_tree(&large, 4, 4, 10);

    let mut group = c.benchmark_group("render");

    group.bench_function("small_tree", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            render_with(black_box(&[&small]), &mut sink, &RenderOptions::default()).unwrap();
            sink
        });
    });

    group.bench_function("large_tree", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            render_with(black_box(&[&large]), &mut sink, &RenderOptions::default()).unwrap();
            sink
        });
    });

    group.bench_function("large_tree_sorted", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            render_with(black_box(&[&large]), &mut sink, &RenderOptions { sort: true }).unwrap();
            sink
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_render);
criterion_main!(benches);
