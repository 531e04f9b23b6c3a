use chronoscope::{
    Catalog, Character, QueryParameters, Scene, StoryArc, TimelineView, catalog, derive,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn synthetic_catalog(size: usize) -> Catalog {
    let scenes = (0..size)
        .map(|i| {
            let arc = StoryArc::ALL[i % StoryArc::ALL.len()];
            Scene::new(
                format!("S{:04}", i),
                format!("Scene number {}", i),
                arc,
                (i % 101) as u8,
                "A generated summary with enough words to make searching non-trivial.",
            )
            .with_tags(["generated", if i % 7 == 0 { "cipher" } else { "plain" }])
        })
        .collect();
    Catalog::new(Character::Icarus, scenes).unwrap()
}

fn bench_builtin(c: &mut Criterion) {
    let mut group = c.benchmark_group("builtin_catalog");

    let cases = [
        ("defaults", QueryParameters::default()),
        ("search", QueryParameters::default().with_search("cipher")),
        (
            "all_filters_desc",
            QueryParameters::default()
                .with_search("a")
                .with_arc(StoryArc::Duality)
                .with_min_reveal(50)
                .with_sort_ascending(false),
        ),
    ];

    for (name, params) in cases.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| derive(black_box(catalog::icarus()), black_box(params)));
        });
    }

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_scaling");

    for size in [10, 100, 1000].iter() {
        let catalog = synthetic_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("search_desc", size), &catalog, |b, cat| {
            let params = QueryParameters::default()
                .with_search("cipher")
                .with_sort_ascending(false);
            b.iter(|| derive(black_box(cat), black_box(&params)));
        });
    }

    group.finish();
}

fn bench_memoized_view(c: &mut Criterion) {
    let mut view = TimelineView::builtin();
    view.set_search("signal");
    view.select_character(Character::Vega);

    c.bench_function("view_derived_memoized", |b| {
        b.iter(|| black_box(view.derived()));
    });
}

criterion_group!(benches, bench_builtin, bench_scaling, bench_memoized_view);
criterion_main!(benches);
