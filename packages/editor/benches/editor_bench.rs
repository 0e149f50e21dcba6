use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsontree_editor::{expand_to_depth, walk, EditSession, EditorConfig, ExpansionSet, Path};
use serde_json::{json, Value};

fn wide_document(rows: usize) -> Value {
    let items: Vec<Value> = (0..rows)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("row-{}", i),
                "tags": ["a", "b", "c"],
                "meta": { "created": "2024-01-01", "flags": { "hidden": false } }
            })
        })
        .collect();
    json!({ "items": items })
}

fn walk_fully_expanded(c: &mut Criterion) {
    let doc = wide_document(500);
    let mut expanded = ExpansionSet::new();
    expand_to_depth(&doc, &mut expanded, None);

    c.bench_function("walk_fully_expanded", |b| {
        b.iter(|| walk(black_box(&doc), black_box(&expanded), None))
    });
}

fn remove_from_front(c: &mut Criterion) {
    let doc = wide_document(500);

    c.bench_function("remove_from_front", |b| {
        b.iter_batched(
            || {
                let data = doc.clone();
                let mut session = EditSession::new("bench", EditorConfig::default());
                session.expand_all(&data);
                (data, session)
            },
            |(mut data, mut session)| {
                session.remove_element(&mut data, &Path::parse("items"), 0);
                black_box(session.version())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn move_across_array(c: &mut Criterion) {
    let doc = wide_document(500);

    c.bench_function("move_across_array", |b| {
        b.iter_batched(
            || {
                let data = doc.clone();
                let mut session = EditSession::new("bench", EditorConfig::default());
                session.expand_all(&data);
                (data, session)
            },
            |(mut data, mut session)| {
                session.move_element(&mut data, &Path::parse("items"), 0, 499);
                black_box(session.version())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, walk_fully_expanded, remove_from_front, move_across_array);
criterion_main!(benches);
