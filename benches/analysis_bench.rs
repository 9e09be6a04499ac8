use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nocebo::rewrite::REPLACEMENT_RULES;
use nocebo::{detect_categories, split_sentences, NoceboAnalyzer, RewriteEngine};

const SHORT_TEXT: &str = "After sedation, you must not drive for 24 hours. Rare complications include stroke. If you feel unwell, seek urgent medical help.";

// WHY: repeated consent paragraph approximates a full patient information leaflet
fn long_text() -> String {
    let paragraph = "The procedure is routine and safe. Severe bleeding is possible! \
        Nausea and headache may occur? Cardiac arrest or death can occur. Do not eat after midnight. ";
    paragraph.repeat(200)
}

fn bench_pipeline_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_stages");
    let long = long_text();

    group.bench_function("rule_compilation", |b| {
        b.iter(|| {
            black_box(RewriteEngine::new(REPLACEMENT_RULES).unwrap());
        })
    });

    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("split_long_text", |b| {
        b.iter(|| {
            black_box(split_sentences(black_box(&long)));
        })
    });

    let sentences = split_sentences(&long);
    group.bench_function("tag_long_text", |b| {
        b.iter(|| {
            for sentence in &sentences {
                black_box(detect_categories(sentence));
            }
        })
    });

    let engine = RewriteEngine::standard();
    group.bench_function("rewrite_long_text", |b| {
        b.iter(|| {
            for sentence in &sentences {
                black_box(engine.rewrite(sentence));
            }
        })
    });

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let model_path = concat!(env!("CARGO_MANIFEST_DIR"), "/models/nocebo_model.json");
    let analyzer = NoceboAnalyzer::from_artifact_path(model_path).unwrap();
    let long = long_text();

    let mut group = c.benchmark_group("analyze");

    group.bench_function("short_text", |b| {
        b.iter(|| {
            black_box(analyzer.analyze(black_box(SHORT_TEXT)));
        })
    });

    group.throughput(Throughput::Bytes(long.len() as u64));
    group.bench_function("long_text", |b| {
        b.iter(|| {
            black_box(analyzer.analyze(black_box(&long)));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline_stages, bench_analyze);
criterion_main!(benches);
