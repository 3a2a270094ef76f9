use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pagecraft_editor::{ComponentId, ComponentType, History, TreeStore};
use pagecraft_model::SequentialIdGenerator;

/// `sections` containers, each holding a heading, text and a row of buttons
fn page(sections: usize) -> (TreeStore, Vec<ComponentId>) {
    let mut store = TreeStore::with_id_generator(SequentialIdGenerator::new("b"));
    let mut ids = Vec::new();

    for _ in 0..sections {
        let section = store.add(ComponentType::Container, None).id.clone();
        ids.push(store.add(ComponentType::Heading, Some(&section)).id.clone());
        ids.push(store.add(ComponentType::Text, Some(&section)).id.clone());
        let row = store.add(ComponentType::Row, Some(&section)).id.clone();
        for _ in 0..3 {
            ids.push(store.add(ComponentType::Button, Some(&row)).id.clone());
        }
        ids.push(row);
        ids.push(section);
    }

    (store, ids)
}

fn snapshot_page(c: &mut Criterion) {
    let (store, _) = page(100);

    c.bench_function("snapshot_700_components", |b| {
        b.iter(|| black_box(store.snapshot()))
    });
}

fn find_deep(c: &mut Criterion) {
    let (store, ids) = page(100);
    let last = ids[ids.len() - 3].clone();

    c.bench_function("find_last_button", |b| {
        b.iter(|| store.find(black_box(&last)).is_some())
    });
}

fn remove_section(c: &mut Criterion) {
    let (store, ids) = page(100);
    let state = store.snapshot();
    let section = ids[ids.len() - 1].clone();

    c.bench_function("remove_section", |b| {
        b.iter_batched(
            || {
                let mut store = TreeStore::new();
                store.restore(&state);
                store
            },
            |mut store| store.remove(black_box(&section)),
            BatchSize::SmallInput,
        )
    });
}

fn checkpoint_past_cap(c: &mut Criterion) {
    let (store, _) = page(20);

    c.bench_function("checkpoint_at_cap", |b| {
        let mut history = History::new();
        for _ in 0..history.max_levels() {
            history.checkpoint(&store);
        }
        b.iter(|| history.checkpoint(black_box(&store)))
    });
}

criterion_group!(
    benches,
    snapshot_page,
    find_deep,
    remove_section,
    checkpoint_past_cap
);
criterion_main!(benches);
