use algos_mincut::cs::graph::{Graph, MinCutConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Two complete graphs of `k` vertices joined by a single bridge.
fn barbell(k: u32) -> Graph<u32> {
    let mut edges = Vec::new();
    for offset in [0, k] {
        for i in offset..offset + k {
            for j in (i + 1)..offset + k {
                edges.push((i, j));
            }
        }
    }
    edges.push((0, k));
    Graph::from_edges(&edges).unwrap()
}

fn bench_single_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger_single_trial");
    for k in [5, 10, 20, 40] {
        let graph = barbell(k);
        let config = MinCutConfig::new().with_seed(1).with_trials(1);
        group.bench_with_input(BenchmarkId::from_parameter(2 * k), &graph, |b, graph| {
            b.iter(|| graph.find_min_cut_with(black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger_100_trials");
    let graph = barbell(20);
    for parallel in [false, true] {
        let config = MinCutConfig::new()
            .with_seed(1)
            .with_trials(100)
            .parallel(parallel);
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| graph.find_min_cut_with(black_box(&config)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_trial, bench_sequential_vs_parallel);
criterion_main!(benches);
