use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use mergesort::patterns;

fn bench_pattern(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    // LargeInput keeps criterion from holding thousands of generated vectors
    // alive at once for the bigger sizes.
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("mergesort-i32-{pattern_name}-{test_len}"), |b| {
        b.iter_batched(
            || pattern_provider(test_len),
            |mut test_data| mergesort::sort(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn ensure_true_random() {
    // Once the fixed seed is disabled, two calls must not see the same data.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn full_benchmarks(c: &mut Criterion) {
    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_len in [16, 256, 4_096, 65_536] {
        bench_pattern(c, test_len, "random", patterns::random);
        bench_pattern(c, test_len, "random_binary", |len| {
            patterns::random_uniform(len, 0..=1)
        });
        bench_pattern(c, test_len, "ascending", patterns::ascending);
        bench_pattern(c, test_len, "descending", patterns::descending);
        bench_pattern(c, test_len, "all_equal", patterns::all_equal);
        bench_pattern(c, test_len, "saw_mixed", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        });
        bench_pattern(c, test_len, "pipe_organ", patterns::pipe_organ);
    }
}

criterion_group!(benches, full_benchmarks);
criterion_main!(benches);
