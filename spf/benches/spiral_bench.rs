use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spf::opt::spiral::{SpiralIterator, spiral_cell};
use spf::opt::pack;
use trapack::classification::{ToleranceConfig, classify};
use trapack::entities::{RectSpec, Sheet};
use trapack::geometry::TrapezoidSpec;

criterion_main!(benches);
criterion_group!(benches, spiral_pack_bench, spiral_cell_bench, classify_bench);

const DETAIL_SIZES: [f64; 3] = [20.0, 10.0, 5.0];
const N_CELLS_PER_ITER: u64 = 10_000;

fn create_sheet() -> Sheet {
    let spec = TrapezoidSpec {
        bottom_base: 300.0,
        top_base: 180.0,
        height: 150.0,
        vertical_margin: 1.0,
    };
    Sheet::new(&spec, 1.0).expect("invalid benchmark sheet")
}

/// Benchmark a complete packing run for increasingly small details.
fn spiral_pack_bench(c: &mut Criterion) {
    let sheet = create_sheet();
    let tolerance = ToleranceConfig::new(0.5).expect("invalid tolerance");

    let mut group = c.benchmark_group("spiral_pack");
    for size in DETAIL_SIZES {
        let rect = RectSpec::new(size, size).expect("invalid detail");
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| pack(&sheet, &rect, &tolerance, 1_000_000))
        });
    }
    group.finish();
}

/// Benchmark the index to cell mapping against stepping the iterator.
fn spiral_cell_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_cell_10k");
    group.throughput(criterion::Throughput::Elements(N_CELLS_PER_ITER));

    group.bench_function("direct", |b| {
        b.iter(|| (0..N_CELLS_PER_ITER).map(spiral_cell).fold(0, |acc, cell| acc ^ cell.col ^ cell.row))
    });
    group.bench_function("iterator", |b| {
        b.iter(|| {
            SpiralIterator::default()
                .take(N_CELLS_PER_ITER as usize)
                .fold(0, |acc, cell| acc ^ cell.col ^ cell.row)
        })
    });
    group.finish();
}

/// Benchmark how many rectangles can be classified every second against the sheet.
fn classify_bench(c: &mut Criterion) {
    let sheet = create_sheet();
    let tolerance = ToleranceConfig::new(0.5).expect("invalid tolerance");
    let rect = RectSpec::new(10.0, 10.0).expect("invalid detail");
    let centers = (-16..=16)
        .flat_map(|col| (-1..=16).map(move |row| (col as f64 * 10.0, 5.0 + row as f64 * 10.0)))
        .map(|(x, y)| trapack::geometry::primitives::Point(x, y))
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("classify");
    group.throughput(criterion::Throughput::Elements(centers.len() as u64));
    group.bench_function("grid", |b| {
        b.iter(|| {
            centers
                .iter()
                .filter(|center| classify(&rect.corners(**center), &sheet.outer, &tolerance).is_valid())
                .count()
        })
    });
    group.finish();
}
