use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quire_view::{ChangeType, Item, ViewDocument};

fn build_fragment_from_strings(c: &mut Criterion) {
    let words: Vec<String> = (0..256).map(|i| format!("word {}", i)).collect();

    c.bench_function("build_fragment_from_strings", |b| {
        b.iter(|| {
            let mut doc = ViewDocument::new();
            doc.create_fragment_with(black_box(words.clone())).unwrap()
        })
    });
}

fn insert_at_front(c: &mut Criterion) {
    c.bench_function("insert_at_front", |b| {
        b.iter(|| {
            let mut doc = ViewDocument::new();
            let fragment = doc.create_fragment();
            doc.fragment_mut(fragment)
                .unwrap()
                .on(ChangeType::Children, |event| {
                    black_box(event);
                });
            for i in 0..256 {
                doc.insert_children(fragment, 0, black_box(format!("{}", i))).unwrap();
            }
            fragment
        })
    });
}

fn move_between_fragments(c: &mut Criterion) {
    c.bench_function("move_between_fragments", |b| {
        b.iter(|| {
            let mut doc = ViewDocument::new();
            let items: Vec<Item> = (0..128).map(|i| Item::from(format!("{}", i))).collect();
            let source = doc.create_fragment_with(items).unwrap();
            let target = doc.create_fragment();
            let children = doc.fragment(source).unwrap().child_ids().to_vec();
            doc.append_children(target, children).unwrap();
            black_box(doc.remove_children(target, 0, 64).unwrap())
        })
    });
}

criterion_group!(
    benches,
    build_fragment_from_strings,
    insert_at_front,
    move_between_fragments
);
criterion_main!(benches);
