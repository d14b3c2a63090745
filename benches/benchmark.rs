//! Performance benchmarks for product-query.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use product_query::{build_search_urls, clean, optimize_queries, plan_search};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>360 Panoramic Smart Camera with Night Vision | Free Shipping</title>
    <meta property="og:title" content="360 Panoramic Smart Camera with Night Vision">
</head>
<body>
    <nav><a href="/">Home</a><a href="/cameras">Cameras</a></nav>
    <main>
        <h1>360&deg; Panoramic Smart Camera with Night Vision - Official Store</h1>
        <p class="price">$39.99</p>
        <ul class="features">
            <li>1080p HD video</li>
            <li>Two-way audio</li>
        </ul>
    </main>
</body>
</html>
"#;

const TITLES: [&str; 4] = [
    "Premium Wireless Bluetooth Headphones with Noise Cancellation",
    "Stylish Women's Summer Dress | Fast Shipping",
    "Ultra Lightweight Running Shoes for Men",
    "Smart Home Security System with Mobile App • Amazon",
];

fn bench_clean(c: &mut Criterion) {
    c.bench_function("clean", |b| {
        b.iter(|| clean(black_box("Stylish Women's Summer Dress | Fast Shipping")));
    });
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_queries");
    for (i, title) in TITLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), title, |b, title| {
            b.iter(|| optimize_queries(black_box(title)));
        });
    }
    group.finish();
}

fn bench_build_urls(c: &mut Criterion) {
    c.bench_function("build_search_urls", |b| {
        b.iter(|| build_search_urls(black_box("wireless bluetooth headphones")));
    });
}

fn bench_plan_search(c: &mut Criterion) {
    c.bench_function("plan_search", |b| {
        b.iter(|| plan_search(black_box(SAMPLE_HTML)));
    });
}

criterion_group!(benches, bench_clean, bench_optimize, bench_build_urls, bench_plan_search);
criterion_main!(benches);
