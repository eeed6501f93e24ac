//! Performance benchmarks for playlist editing
//!
//! Run with: cargo bench -p playlist-storage --bench playlist_edit_benchmark

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use playlist_core::{PlaylistHandle, PlaylistService, SystemClock, Track};
use playlist_storage::MemoryPlaylistStore;

/// Generate a batch of tracks with varied durations
fn generate_tracks(count: usize, first_id: i32) -> Vec<Track> {
    (0..count)
        .map(|i| {
            let id = first_id + i as i32;
            Track::new(id, format!("Track {id}"), 120.0 + (i % 90) as f32, 1)
        })
        .collect()
}

fn service_with(count: usize) -> (PlaylistService<MemoryPlaylistStore>, PlaylistHandle) {
    let mut store = MemoryPlaylistStore::new();
    let handle = store.create("Benchmark", Utc::now()).unwrap();
    let mut service = PlaylistService::new(store, SystemClock);
    if count > 0 {
        service
            .add_tracks(&handle, generate_tracks(count, 1), -1)
            .unwrap();
    }
    (service, handle)
}

fn bench_insert_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("playlist_insert");
    let batch = generate_tracks(50, 10_000);
    group.throughput(Throughput::Elements(batch.len() as u64));

    for (label, position) in [("front", 0i64), ("middle", 200), ("append", -1)] {
        group.bench_with_input(BenchmarkId::new("400+50", label), &position, |b, &position| {
            b.iter_batched(
                || service_with(400),
                |(mut service, handle)| {
                    black_box(
                        service
                            .add_tracks(&handle, batch.clone(), black_box(position))
                            .unwrap(),
                    )
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_remove_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("playlist_remove");

    for removed in [1usize, 50, 250] {
        let positions: Vec<i64> = (0..removed).map(|i| (i * 2) as i64).collect();
        group.throughput(Throughput::Elements(removed as u64));

        group.bench_with_input(
            BenchmarkId::new("500 tracks", removed),
            &positions,
            |b, positions| {
                b.iter_batched(
                    || service_with(500),
                    |(mut service, handle)| {
                        black_box(service.remove_tracks(&handle, black_box(positions)).unwrap())
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert_positions, bench_remove_batches);
criterion_main!(benches);
