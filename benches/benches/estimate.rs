use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use graphql_cost_estimator::CostEstimator;

const NESTED_LIMITS_QUERY: &str = r#"{
  assets(where: { isActive: true }, limit: 10) {
    id
    slug
    logoUrl
    metrics(where: { metricKeys: ["reward_rate"] }, limit: 10, order: { createdAt: desc }) {
      defaultValue
      createdAt
    }
  }
}"#;

fn deep_query(depth: usize) -> String {
    let mut selection = String::from("leaf");
    for _ in 0..depth {
        selection = format!("node(limit: 2) {{ {selection} }}");
    }
    format!("{{ {selection} }}")
}

fn bench_estimate(c: &mut Criterion) {
    let estimator = CostEstimator::new();

    c.bench_function("estimate_flat", |b| {
        b.iter(|| estimator.estimate(black_box("{ a b c }")).unwrap());
    });

    c.bench_function("estimate_nested_limits", |b| {
        b.iter(|| estimator.estimate(black_box(NESTED_LIMITS_QUERY)).unwrap());
    });

    // Parse once; measure the walk alone on a deeply nested document
    let deep = deep_query(48);
    let document = graphql_cost_syntax::parse(&deep).unwrap();
    c.bench_function("estimate_document_deep", |b| {
        b.iter(|| estimator.estimate_document(black_box(&document)).unwrap());
    });
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
