use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_qa_core::{answer_question, default_knowledge_base, search_documents, Document};
use time::OffsetDateTime;
use ulid::Ulid;

fn sample_documents(count: usize) -> Vec<Document> {
    let now = OffsetDateTime::UNIX_EPOCH;
    (0..count)
        .map(|index| Document {
            id: Ulid::new(),
            title: format!("Note {index}"),
            content: "Working notes on language, art, and the limits of expression.".to_string(),
            category: "notes".to_string(),
            tags: vec!["language".to_string(), "art".to_string()],
            created_at: now,
            updated_at: now,
            word_count: 10,
        })
        .collect()
}

fn bench_cascade(c: &mut Criterion) {
    let kb = default_knowledge_base();
    let documents = sample_documents(50);

    c.bench_function("cascade_thesis_question", |b| {
        b.iter(|| {
            answer_question(
                black_box("What is the Master's thesis about?"),
                black_box(&kb),
                black_box(&documents),
            )
        });
    });

    c.bench_function("cascade_default_fallthrough", |b| {
        b.iter(|| answer_question(black_box("zzzz"), black_box(&kb), black_box(&[])));
    });

    c.bench_function("document_search_50", |b| {
        b.iter(|| search_documents(black_box("tell me about art and language"), black_box(&documents)));
    });
}

criterion_group!(benches, bench_cascade);
criterion_main!(benches);
