//! # Editorial Engine Benchmarks
//!
//! Hot paths of an editing session, measured over desk sizes an editorial
//! console plausibly holds:
//!
//! | Path | Work per call |
//! |------|---------------|
//! | `view` | filter + stable sort of the full collection |
//! | `move_item` | relocate + renumber of one working copy |
//! | `order_updates` | one update per working-copy entry |
//! | `next_order` | max over the full collection |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ed_02_ordering::{next_order, view, CategoryFilter, StatusFilter, WorkingCopy};
use rand::Rng;
use shared_types::{Article, ArticleStatus, Category};

const DESK_SIZES: [usize; 3] = [100, 1_000, 10_000];

fn desk(size: usize) -> Vec<Article> {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|i| {
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let status = ArticleStatus::ALL[rng.gen_range(0..ArticleStatus::ALL.len())];
            let article = Article::new(format!("a{i}"), category, status);
            // Roughly one in ten legacy articles never got an order.
            if rng.gen_ratio(1, 10) {
                article
            } else {
                article.with_order(rng.gen_range(0..size as i64))
            }
        })
        .collect()
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("ed-02-view");
    for size in DESK_SIZES {
        let articles = desk(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("all", size), &articles, |b, articles| {
            b.iter(|| view(black_box(articles), CategoryFilter::All, StatusFilter::All))
        });
        group.bench_with_input(
            BenchmarkId::new("travel_drafts", size),
            &articles,
            |b, articles| {
                b.iter(|| {
                    view(
                        black_box(articles),
                        Category::Travel.into(),
                        ArticleStatus::Draft.into(),
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("ed-02-reorder");
    for size in DESK_SIZES {
        let copy = WorkingCopy::begin(view(&desk(size), CategoryFilter::All, StatusFilter::All));
        group.bench_with_input(
            BenchmarkId::new("move_last_to_first", size),
            &copy,
            |b, copy| {
                b.iter_batched(
                    || copy.clone(),
                    |mut working| {
                        working.move_item(size - 1, Some(0));
                        working
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(BenchmarkId::new("order_updates", size), &copy, |b, copy| {
            b.iter(|| black_box(copy).order_updates())
        });
    }
    group.finish();
}

fn bench_next_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("ed-03-next-order");
    for size in DESK_SIZES {
        let articles = desk(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &articles, |b, articles| {
            b.iter(|| next_order(black_box(articles)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_view, bench_reorder, bench_next_order);
criterion_main!(benches);
