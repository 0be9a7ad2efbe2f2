use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use trawl::{QueryTreeBuilder, TranslationContext};

fn bench_translate_simple(c: &mut Criterion) {
    let builder = QueryTreeBuilder::default();
    let ctx = TranslationContext::new();
    let document = json!({ "term": { "status": "published" } });

    c.bench_function("translate_term", |b| {
        b.iter(|| {
            let node = builder.build(&ctx, black_box(&document)).unwrap();
            black_box(node)
        })
    });
}

fn bench_translate_nested(c: &mut Criterion) {
    let builder = QueryTreeBuilder::default();
    let ctx = TranslationContext::new();
    let document = json!({
        "bool": {
            "must": [
                { "match": { "content": { "query": "rust programming", "operator": "and" } } },
                { "fuzzy": { "author": { "value": "john", "fuzziness": 1 } } }
            ],
            "should": [
                { "prefix": { "tags": "tut" } },
                { "wildcard": { "title": "ru*t" } }
            ],
            "filter": [
                { "range": { "year": { "gte": 2020, "lte": 2024 } } }
            ]
        }
    });

    c.bench_function("translate_nested_bool", |b| {
        b.iter(|| {
            let node = builder.build(&ctx, black_box(&document)).unwrap();
            black_box(node)
        })
    });
}

criterion_group!(benches, bench_translate_simple, bench_translate_nested);
criterion_main!(benches);
