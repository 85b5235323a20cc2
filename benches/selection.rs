// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_picker::library::PhotoAsset;
use iced_picker::picker::{GridEntry, Selection};
use std::hint::black_box;
use std::path::PathBuf;
use std::time::SystemTime;

fn entries(count: usize) -> Vec<GridEntry> {
    (0..count)
        .map(|i| {
            GridEntry::new(PhotoAsset::new(
                PathBuf::from(format!("/photos/{i}.jpg")),
                SystemTime::UNIX_EPOCH,
            ))
        })
        .collect()
}

fn selection_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    // Worst case for the renumbering pass: deselect the oldest pick while a
    // large selection is active, which shifts every remaining rank.
    group.bench_function("toggle_head_of_1000", |b| {
        let entries = entries(1000);
        let mut selection = Selection::new();
        for entry in &entries {
            selection.toggle(entry);
        }

        b.iter(|| {
            selection.toggle(black_box(&entries[0]));
            selection.toggle(black_box(&entries[0]));
        });
    });

    group.bench_function("rank_of_tail_of_1000", |b| {
        let entries = entries(1000);
        let mut selection = Selection::new();
        for entry in &entries {
            selection.toggle(entry);
        }
        let tail = entries[999].id;

        b.iter(|| {
            let _ = black_box(selection.rank_of(black_box(tail)));
        });
    });

    group.finish();
}

criterion_group!(benches, selection_benchmark);
criterion_main!(benches);
