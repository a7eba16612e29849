// Benchmark for the appointment layout pipeline
// Measures normalization and grid placement over growing record counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use agenda_grid::models::appointment::Appointment;
use agenda_grid::models::settings::LayoutSettings;
use agenda_grid::services::grid::week::WeekGrid;
use agenda_grid::services::layout::{display_blocks, process_events};
use chrono::{Duration, NaiveDate};

fn sample_records(count: usize) -> Vec<Appointment> {
    let monday = NaiveDate::from_ymd_opt(2021, 5, 31)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    (0..count)
        .map(|i| {
            let start = monday + Duration::hours((i % 12) as i64) + Duration::days((i % 7) as i64);
            let end = start + Duration::hours(1 + (i % 3) as i64);
            Appointment::new(start, Some(end), format!("Session {}", i)).unwrap()
        })
        .collect()
}

fn bench_process_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_events");

    for count in [10, 100, 1000].iter() {
        let records = sample_records(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| process_events(black_box(records.clone())));
        });
    }

    group.finish();
}

fn bench_display_blocks(c: &mut Criterion) {
    let settings = LayoutSettings::default();
    let grid = WeekGrid::new(&settings);
    let records = process_events(sample_records(100));

    c.bench_function("display_blocks_100", |b| {
        b.iter(|| display_blocks(black_box(&grid), black_box(&records), black_box(&settings)));
    });
}

fn bench_week_snapshot(c: &mut Criterion) {
    let settings = LayoutSettings::default();
    let grid = WeekGrid::new(&settings);
    let date = NaiveDate::from_ymd_opt(2021, 6, 2)
        .unwrap()
        .and_hms_opt(13, 0, 0)
        .unwrap();

    c.bench_function("week_snapshot", |b| {
        b.iter(|| grid.snapshot(black_box(date)));
    });
}

criterion_group!(
    benches,
    bench_process_events,
    bench_display_blocks,
    bench_week_snapshot
);
criterion_main!(benches);
