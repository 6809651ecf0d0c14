use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cropwise_ai::{rank_top_k, CentroidClassifier, FeatureVector};

/// Deterministic, unevenly spread probabilities (not normalized; ranking does not care).
fn synthetic_distribution(n: usize) -> (Vec<f64>, Vec<String>) {
    let probabilities = (0..n)
        .map(|i| ((i as u64).wrapping_mul(2_654_435_761) % 10_007) as f64 / 10_007.0)
        .collect();
    let labels = (0..n).map(|i| format!("crop-{i}")).collect();
    (probabilities, labels)
}

/// Full sort baseline: what ranking would cost without partial selection.
fn full_sort_top_k(probabilities: &[f64], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..probabilities.len()).collect();
    indices.sort_by(|a, b| probabilities[*b].total_cmp(&probabilities[*a]));
    indices.truncate(k);
    indices
}

fn bench_top_k_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_selection");

    for n in [22usize, 1_000, 100_000].iter() {
        let (probabilities, labels) = synthetic_distribution(*n);
        group.throughput(Throughput::Elements(*n as u64));

        group.bench_with_input(BenchmarkId::new("partial_select", n), n, |b, _| {
            b.iter(|| black_box(rank_top_k(&probabilities, &labels, 3).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("full_sort", n), n, |b, _| {
            b.iter(|| black_box(full_sort_top_k(&probabilities, 3)));
        });
    }

    group.finish();
}

fn bench_reference_recommendation(c: &mut Criterion) {
    let ctx = CentroidClassifier::reference().into_context();
    let features = FeatureVector::from_array([90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]);

    c.bench_function("reference_recommend_top3", |b| {
        b.iter(|| black_box(ctx.recommend(&features, 3).unwrap()));
    });
}

criterion_group!(benches, bench_top_k_selection, bench_reference_recommendation);
criterion_main!(benches);
