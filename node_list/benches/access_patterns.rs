// benches/access_patterns.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use node_list::NodeList;

#[derive(Clone, Copy, Default, PartialEq)]
struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

fn point(i: usize) -> Point3D {
    Point3D {
        x: i as f64,
        y: (i * 2) as f64,
        z: (i * 3) as f64,
    }
}

fn create_list(size: usize) -> NodeList<Point3D> {
    let mut list = NodeList::new();
    for i in 0..size {
        list.add(point(i));
    }
    list
}

fn bench_indexed_get(c: &mut Criterion) {
    let sizes = vec![100, 1_000];

    let mut group = c.benchmark_group("indexed_get");
    for size in sizes {
        let list = create_list(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..list.len() {
                    sum += black_box(list.get(i).unwrap().x);
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_iterator(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("iterator");
    for size in sizes {
        let list = create_list(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let sum: f64 = list.iter().map(|p| black_box(p.x)).sum();
                sum
            });
        });
    }
    group.finish();
}

fn bench_first_last(c: &mut Criterion) {
    let list = create_list(10_000);

    c.bench_function("first_last", |b| {
        b.iter(|| {
            let first = black_box(list.first().map(|p| p.x));
            let last = black_box(list.last().map(|p| p.z));
            (first, last)
        });
    });
}

fn bench_build(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("build");
    for size in sizes {
        group.bench_with_input(BenchmarkId::new("add", size), &size, |b, &s| {
            b.iter(|| create_list(s));
        });

        group.bench_with_input(BenchmarkId::new("with_size", size), &size, |b, &s| {
            b.iter(|| NodeList::<Point3D>::with_size(s, false));
        });

        group.bench_with_input(BenchmarkId::new("from_sequence", size), &size, |b, &s| {
            let data: Vec<Point3D> = (0..s).map(point).collect();
            b.iter(|| NodeList::from_sequence(data.iter().copied(), false));
        });
    }
    group.finish();
}

fn bench_edit_operations(c: &mut Criterion) {
    let sizes = vec![100, 1_000];

    let mut group = c.benchmark_group("edit_operations");
    for size in sizes {
        group.bench_with_input(BenchmarkId::new("insert_middle", size), &size, |b, &s| {
            b.iter_batched(
                || create_list(s),
                |mut list| {
                    list.insert(s / 2, point(0)).unwrap();
                    list
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("remove_last", size), &size, |b, &s| {
            b.iter_batched(
                || create_list(s),
                |mut list| {
                    list.remove_at(s - 1).unwrap();
                    list
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("set_all", size), &size, |b, &s| {
            let mut list = NodeList::<Point3D>::with_size(s, false);
            b.iter(|| {
                for i in 0..list.len() {
                    list.set(i, point(i)).unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let list = create_list(10_000);
    let needle = point(9_999);

    c.bench_function("index_of_worst_case", |b| {
        b.iter(|| black_box(list.index_of(&needle)));
    });
}

fn bench_random_access(c: &mut Criterion) {
    use rand::prelude::*;

    let size = 1_000;
    let mut group = c.benchmark_group("random_access");

    group.bench_function("sequential", |b| {
        let list = create_list(size);
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..list.len() {
                sum += black_box(list[i].x);
            }
            sum
        });
    });

    group.bench_function("random", |b| {
        let list = create_list(size);
        let mut rng = StdRng::seed_from_u64(42);
        let indices: Vec<usize> = (0..size).map(|_| rng.random_range(0..size)).collect();

        b.iter(|| {
            let mut sum = 0.0;
            for &i in &indices {
                sum += black_box(list[i].x);
            }
            sum
        });
    });

    group.finish();
}

fn bench_vs_vec(c: &mut Criterion) {
    let size = 10_000;
    let mut group = c.benchmark_group("vs_vec");

    group.bench_function("node_list_iter", |b| {
        let list = create_list(size);
        b.iter(|| list.iter().map(|p| black_box(p.y)).sum::<f64>());
    });

    group.bench_function("vec_iter", |b| {
        let data: Vec<Point3D> = (0..size).map(point).collect();
        b.iter(|| data.iter().map(|p| black_box(p.y)).sum::<f64>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_indexed_get,
    bench_iterator,
    bench_first_last,
    bench_build,
    bench_edit_operations,
    bench_search,
    bench_random_access,
    bench_vs_vec
);
criterion_main!(benches);
