use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tunegrab::batch::{names, NamingStrategy};
use tunegrab::extractor::Item;
use tunegrab::utils::sanitize_filename;

fn benchmark_sanitize_filename(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filename Sanitization");

    group.bench_function("simple", |b| {
        b.iter(|| sanitize_filename(black_box("song.mp3")))
    });

    group.bench_function("complex", |b| {
        b.iter(|| sanitize_filename(black_box("My Song (2024) - Remix [Official Audio].mp3")))
    });

    group.bench_function("unicode", |b| {
        b.iter(|| sanitize_filename(black_box("Café del Mar — Beispiel Früh")))
    });

    group.bench_function("malicious", |b| {
        b.iter(|| sanitize_filename(black_box("../../../etc/passwd")))
    });

    let long_name = "a".repeat(500) + ".mp3";
    group.bench_function("long", |b| {
        b.iter(|| sanitize_filename(black_box(&long_name)))
    });

    group.finish();
}

fn benchmark_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Naming");

    let items: Vec<Item> = (0..100)
        .map(|i| Item {
            title: format!("Track {} (Official Audio)", i),
            url: format!("https://www.youtube.com/watch?v=vid{}", i),
            ..Default::default()
        })
        .collect();

    group.bench_function("original_title_100", |b| {
        b.iter(|| names(black_box(&items), NamingStrategy::OriginalTitle, None))
    });

    group.bench_function("numbered_100", |b| {
        b.iter(|| names(black_box(&items), NamingStrategy::NumberedSequence, None))
    });

    group.finish();
}

criterion_group!(benches, benchmark_sanitize_filename, benchmark_naming);
criterion_main!(benches);
