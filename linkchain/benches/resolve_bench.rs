use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkchain::chain::{ChainResolver, MockFs};
use linkchain::path::{normalize, resolve_components};
use std::path::Path;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute_target", |b| {
        b.iter(|| {
            normalize(
                black_box(Path::new("/opt/app/bin")),
                black_box(Path::new("/usr/local")),
            )
        });
    });

    group.bench_function("relative_target", |b| {
        b.iter(|| {
            normalize(
                black_box(Path::new("../lib/libfoo.so.1")),
                black_box(Path::new("/usr/lib/x86_64")),
            )
        });
    });

    group.bench_function("many_dots", |b| {
        b.iter(|| resolve_components(black_box(Path::new("/a/b/c/d/../../e/./f/../g"))));
    });

    group.finish();
}

/// A straight chain `/c/l0 -> l1 -> ... -> l{len-1} -> end`.
fn linear_chain(len: usize) -> MockFs {
    (0..len)
        .fold(MockFs::new().with_file("/c/end"), |fs, i| {
            let target = if i + 1 == len {
                "end".to_string()
            } else {
                format!("l{}", i + 1)
            };
            fs.with_link(format!("/c/l{i}"), target)
        })
}

fn bench_resolve_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");

    for len in [1, 10, 100] {
        let resolver = ChainResolver::with_fs(linear_chain(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| resolver.resolve(black_box(Path::new("/c/l0"))));
        });
    }

    group.finish();
}

fn bench_resolve_loop(c: &mut Criterion) {
    let fs = MockFs::new()
        .with_link("/c/a", "b")
        .with_link("/c/b", "c")
        .with_link("/c/c", "a");
    let resolver = ChainResolver::with_fs(fs);

    c.bench_function("resolve_three_cycle", |b| {
        b.iter(|| resolver.resolve(black_box(Path::new("/c/a"))));
    });
}

criterion_group!(benches, bench_normalize, bench_resolve_chain, bench_resolve_loop);
criterion_main!(benches);
