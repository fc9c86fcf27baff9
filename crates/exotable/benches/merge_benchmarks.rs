//! Merge performance benchmarks.
//!
//! Measures unification and hash-join merges across table sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use exotable::{ColumnRegistry, DataTable, ExoTable, JoinHow, MergeSpec, SourceMapping};

fn registry() -> ColumnRegistry {
    ColumnRegistry::from_definitions([
        ("pl_name", "Planet name", "N/A"),
        ("pl_per", "Planetary orbital period", "d"),
        ("pl_radj", "Planetary radius", "jupiterRad"),
    ])
    .unwrap()
}

fn mapping(name: &str, registry: &ColumnRegistry) -> SourceMapping {
    let mut builder = SourceMapping::builder(name, registry);
    builder
        .unified("name", "pl_name", "N/A")
        .unwrap()
        .unified("period", "pl_per", "d")
        .unwrap()
        .unified("radius", "pl_radj", "jupiterRad")
        .unwrap();
    builder.build()
}

/// Synthetic raw catalog; `offset` shifts planet names so tables partly overlap.
fn generate_raw(rows: usize, offset: usize) -> DataTable {
    DataTable::from_rows(
        ["name", "period", "radius", "note"],
        (0..rows).map(|i| {
            let id = i + offset;
            [
                format!("Planet-{:06}b", id),
                format!("{:.3}", 1.0 + id as f64 * 0.37),
                format!("{:.2}", 0.5 + (id % 20) as f64 * 0.1),
                format!("Note_{}", id % 7),
            ]
        }),
    )
}

fn load(name: &str, raw: &DataTable, registry: &ColumnRegistry) -> ExoTable {
    ExoTable::from_source(raw, &mapping(name, registry), true).unwrap()
}

/// Benchmark unification of a single source.
fn bench_unify(c: &mut Criterion) {
    let mut group = c.benchmark_group("unify");
    let registry = registry();
    let mapping = mapping("a", &registry);

    for rows in [100, 1_000, 10_000].iter() {
        let raw = generate_raw(*rows, 0);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &raw, |b, raw| {
            b.iter(|| black_box(ExoTable::from_source(raw, &mapping, true).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark outer merges of two half-overlapping catalogs.
fn bench_merge_outer(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_outer");
    let registry = registry();

    for rows in [100, 1_000, 10_000].iter() {
        let left = load("a", &generate_raw(*rows, 0), &registry);
        let right = load("b", &generate_raw(*rows, rows / 2), &registry);

        group.throughput(Throughput::Elements((rows * 2) as u64));
        group.bench_with_input(
            BenchmarkId::new("rows", rows),
            &(left, right),
            |b, (left, right)| b.iter(|| black_box(left.merge(right, &MergeSpec::default()).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark the different join types at a fixed size.
fn bench_merge_how(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_how");
    let registry = registry();
    let left = load("a", &generate_raw(5_000, 0), &registry);
    let right = load("b", &generate_raw(5_000, 2_500), &registry);

    for how in [JoinHow::Inner, JoinHow::Left, JoinHow::Right, JoinHow::Outer] {
        let spec = MergeSpec::new().how(how);
        group.bench_with_input(BenchmarkId::new("how", how), &spec, |b, spec| {
            b.iter(|| black_box(left.merge(&right, spec).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unify, bench_merge_outer, bench_merge_how);
criterion_main!(benches);
