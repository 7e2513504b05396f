use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crop_advisor::engine::recommend_batch;
use crop_advisor::{advise, extract, recommend, SoilClimateContext, QUICK_QUESTIONS};

fn bench_pipeline(c: &mut Criterion) {
    let text = "clay soil and high rainfall, pH 7.9, waterlogged, tropical";
    let ctx = extract(text);

    c.bench_function("extract", |b| b.iter(|| extract(black_box(text))));
    c.bench_function("recommend", |b| b.iter(|| recommend(black_box(&ctx))));
    c.bench_function("advise_quick_questions", |b| {
        b.iter(|| {
            for q in QUICK_QUESTIONS {
                black_box(advise(q));
            }
        })
    });

    let contexts: Vec<SoilClimateContext> = (0..1_000)
        .map(|i| extract(&format!("sandy soil, pH {}.{}", 4 + i % 5, i % 10)))
        .collect();
    c.bench_function("recommend_batch_1000", |b| {
        b.iter(|| recommend_batch(black_box(&contexts)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
