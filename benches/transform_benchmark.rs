// Transform benchmarks
// Author: Gabriel Demetrios Lafis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_augment::{dataset::Dataset, grid::Grid, Transformation};
use serde_json::{json, Value};

fn square_grid(size: usize) -> Value {
    let rows: Vec<Vec<usize>> = (0..size)
        .map(|r| (0..size).map(|c| (r * size + c) % 10).collect())
        .collect();
    json!(rows)
}

fn bench_grid(c: &mut Criterion) {
    let grid = Grid::from_json(&square_grid(30)).unwrap();

    for t in Transformation::ALL {
        c.bench_function(&format!("grid_30x30_{}", t), |b| {
            let value = grid.to_json();
            b.iter(|| t.apply_grid(black_box(&value)).unwrap())
        });
    }
}

fn bench_dataset(c: &mut Criterion) {
    let example = json!({"input": square_grid(20), "output": square_grid(20)});
    let dataset = Dataset::from_value(json!({
        "train": vec![example.clone(); 5],
        "test": vec![example; 2],
    }))
    .unwrap();

    c.bench_function("dataset_rotate_90", |b| {
        b.iter(|| Transformation::Rotate90.apply(black_box(&dataset)).unwrap())
    });
}

criterion_group!(benches, bench_grid, bench_dataset);
criterion_main!(benches);
