use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyed_collection::{from_value, to_value, Collection, Value};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    category: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            category: format!("cat{}", i % 7),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn catalog(size: u32) -> Collection {
    match to_value(&products(size)) {
        Ok(Value::Array(map)) => Collection::new(map),
        _ => Collection::empty(),
    }
}

fn nested_lists(size: usize) -> Collection {
    (0..size)
        .map(|i| Value::array((0..4).map(|j| Value::array(vec![Value::from(i), Value::from(j)]))))
        .collect()
}

fn benchmark_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut collection = Collection::empty();
                for i in 0..size {
                    collection.push(black_box(i));
                }
                collection
            })
        });
    }
    group.finish();
}

fn benchmark_group_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");

    for size in [10, 100, 500].iter() {
        let collection = catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &collection, |b, collection| {
            b.iter(|| black_box(collection).group_by("category"))
        });
    }
    group.finish();
}

fn benchmark_pluck(c: &mut Criterion) {
    let collection = catalog(500);
    let mut group = c.benchmark_group("pluck");

    group.bench_function("pluck", |b| b.iter(|| black_box(&collection).pluck("sku")));
    group.bench_function("pluck_keyed", |b| {
        b.iter(|| black_box(&collection).pluck_keyed("price", "sku"))
    });
    group.bench_function("key_by", |b| b.iter(|| black_box(&collection).key_by("sku")));
    group.finish();
}

fn benchmark_filter_map(c: &mut Criterion) {
    let collection: Collection = (0..1000).map(Value::from).collect();
    let mut group = c.benchmark_group("filter_map");

    group.bench_function("filter", |b| {
        b.iter(|| black_box(&collection).filter(|v, _| v.as_i64().map_or(false, |n| n % 2 == 0)))
    });
    group.bench_function("map", |b| {
        b.iter(|| black_box(&collection).map(|v, _| v.as_i64().map(|n| n * 2)))
    });
    group.finish();
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for size in [10, 100, 500].iter() {
        let collection = nested_lists(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &collection, |b, collection| {
            b.iter(|| black_box(collection).flatten())
        });
    }
    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let collection: Collection = (0..1000).rev().map(|i| Value::from(format!("item{}", i))).collect();

    c.bench_function("sort_strings", |b| {
        b.iter(|| {
            let mut sorted = black_box(&collection).clone();
            sorted.sort();
            sorted
        })
    });
}

fn benchmark_merge(c: &mut Criterion) {
    let first = catalog(200);
    let second = catalog(200);

    c.bench_function("merge", |b| b.iter(|| black_box(&first).merge(black_box(&second))));
    c.bench_function("merge_recursive", |b| {
        b.iter(|| black_box(&first).merge_recursive(black_box(&second)))
    });
}

fn benchmark_serde_bridge(c: &mut Criterion) {
    let items = products(100);
    let value = to_value(&items).unwrap_or_default();
    let mut group = c.benchmark_group("serde_bridge");

    group.bench_function("to_value", |b| b.iter(|| to_value(black_box(&items))));
    group.bench_function("from_value", |b| {
        b.iter(|| from_value::<Vec<Product>>(black_box(value.clone())))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_push,
    benchmark_group_by,
    benchmark_pluck,
    benchmark_filter_map,
    benchmark_flatten,
    benchmark_sort,
    benchmark_merge,
    benchmark_serde_bridge
);
criterion_main!(benches);
