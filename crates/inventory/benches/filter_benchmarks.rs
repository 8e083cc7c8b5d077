use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use autolot_inventory::{FilterCriteria, InventoryFilterEngine, PriceRange, SortKey, VehicleRecord};

const TYPES: [&str; 4] = ["suv", "sedan", "truck", "coupe"];
const FUELS: [&str; 3] = ["gas", "electric", "hybrid"];

fn lot(size: usize) -> Vec<VehicleRecord> {
    (0..size)
        .map(|i| {
            VehicleRecord::new(
                10_000 + ((i * 7919) % 90_000) as i64,
                TYPES[i % TYPES.len()],
                FUELS[i % FUELS.len()],
                2000 + (i % 26) as i32,
            )
        })
        .collect()
}

fn bench_apply_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_filters");

    let criteria = FilterCriteria::new()
        .with_price_range(PriceRange::between(20_000, 60_000))
        .with_fuel("gas")
        .sorted_by(SortKey::PriceLow);

    for size in [24usize, 96, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut engine = InventoryFilterEngine::with_records(lot(size));
            b.iter(|| black_box(engine.apply_filters(black_box(&criteria)).len()));
        });
    }

    group.finish();
}

fn bench_clear_filters(c: &mut Criterion) {
    let mut engine = InventoryFilterEngine::with_records(lot(96));
    c.bench_function("clear_filters/96", |b| {
        b.iter(|| black_box(engine.clear_filters().len()));
    });
}

criterion_group!(benches, bench_apply_filters, bench_clear_filters);
criterion_main!(benches);
