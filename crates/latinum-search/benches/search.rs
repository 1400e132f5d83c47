//! Benchmarks for Latin square enumeration.
//!
//! # Benchmarks
//!
//! - **`reduced`**: Enumerates every reduced square of orders 4 to 6. This is
//!   the raw search: branching, propagation and stack handling.
//! - **`search_node_children`**: Expands the root node of orders 5 to 9 once.
//! - **`all_order_4`**: Enumerates all 576 squares of order 4, which adds the
//!   symmetry expansion on top of the search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use latinum_search::{Generator, SearchNode, SymmetryMode};

fn bench_reduced(c: &mut Criterion) {
    for order in 4..=6 {
        let generator = Generator::new(order, SymmetryMode::Reduced).unwrap();
        c.bench_with_input(BenchmarkId::new("reduced", order), &generator, |b, generator| {
            b.iter(|| hint::black_box(generator.latin_squares().count()));
        });
    }
}

fn bench_children(c: &mut Criterion) {
    for order in [5, 7, 9] {
        let root = SearchNode::new(order).unwrap();
        c.bench_with_input(
            BenchmarkId::new("search_node_children", order),
            &root,
            |b, root| {
                b.iter(|| hint::black_box(root.children()));
            },
        );
    }
}

fn bench_all_order_4(c: &mut Criterion) {
    let generator = Generator::new(4, SymmetryMode::All).unwrap();
    c.bench_function("all_order_4", |b| {
        b.iter(|| hint::black_box(generator.latin_squares().count()));
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_reduced,
        bench_children,
        bench_all_order_4
);
criterion_main!(benches);
