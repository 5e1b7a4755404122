use tasklite_core::{
    decode_tasks, Filter, FixedClock, MemoryStorage, SequentialIdGenerator, TaskId, TaskListStore,
};
use uuid::Uuid;

const NOW_MS: i64 = 1_700_000_000_000;

fn test_store() -> TaskListStore<MemoryStorage> {
    TaskListStore::with_capabilities(
        MemoryStorage::new(),
        Box::new(SequentialIdGenerator::new()),
        Box::new(FixedClock::new(NOW_MS)),
    )
}

fn saved_texts(store: &TaskListStore<MemoryStorage>) -> Vec<String> {
    let raw = store.storage().raw().expect("a payload should be saved");
    decode_tasks(raw)
        .into_iter()
        .map(|task| task.text)
        .collect()
}

#[test]
fn create_prepends_new_task_at_head() {
    let mut store = test_store();

    store.create("first").unwrap();
    store.create("second").unwrap();

    let texts: Vec<&str> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["second", "first"]);
    assert!(store.tasks().iter().all(|task| !task.completed));
    assert!(store.tasks().iter().all(|task| task.created_at == NOW_MS));
}

#[test]
fn create_trims_text_and_rejects_blank_input() {
    let mut store = test_store();

    assert!(store.create("").is_none());
    assert!(store.create("   ").is_none());
    assert!(store.tasks().is_empty());
    // Rejected input never reaches storage either.
    assert!(store.storage().raw().is_none());

    store.create("  padded  ").unwrap();
    assert_eq!(store.tasks()[0].text, "padded");
}

#[test]
fn created_ids_are_unique_within_the_list() {
    let mut store = test_store();
    for n in 0..20 {
        store.create(&format!("task {n}")).unwrap();
    }

    let mut ids: Vec<TaskId> = store.tasks().iter().map(|task| task.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn toggle_flips_only_target_and_keeps_order() {
    let mut store = test_store();
    store.create("a").unwrap();
    let target = store.create("b").unwrap();
    store.create("c").unwrap();

    assert!(store.toggle(target));

    let texts: Vec<&str> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["c", "b", "a"]);
    for task in store.tasks() {
        assert_eq!(task.completed, task.id == target);
        assert_eq!(task.created_at, NOW_MS);
    }
}

#[test]
fn double_toggle_restores_original_state() {
    let mut store = test_store();
    let id = store.create("flip me").unwrap();

    let before = store.tasks().to_vec();
    assert!(store.toggle(id));
    assert!(store.toggle(id));
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn toggle_unknown_id_is_a_noop() {
    let mut store = test_store();
    store.create("only task").unwrap();
    let before = store.tasks().to_vec();

    assert!(!store.toggle(Uuid::from_u128(0xdead_beef)));
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn remove_deletes_only_the_matching_task() {
    let mut store = test_store();
    store.create("a").unwrap();
    let target = store.create("b").unwrap();
    store.create("c").unwrap();

    assert!(store.remove(target));

    let texts: Vec<&str> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["c", "a"]);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut store = test_store();
    store.create("keep").unwrap();

    assert!(!store.remove(Uuid::from_u128(0xdead_beef)));
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn clear_completed_removes_exactly_the_completed_subset() {
    let mut store = test_store();
    let id_a = store.create("a").unwrap();
    store.create("b").unwrap();
    let id_c = store.create("c").unwrap();
    store.create("d").unwrap();
    store.toggle(id_a);
    store.toggle(id_c);

    assert_eq!(store.clear_completed(), 2);

    let texts: Vec<&str> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, ["d", "b"]);
    assert!(store.tasks().iter().all(|task| !task.completed));

    // Nothing left to clear: no-op, count is zero.
    assert_eq!(store.clear_completed(), 0);
}

#[test]
fn incomplete_count_always_matches_active_filter_length() {
    let mut store = test_store();
    let id_a = store.create("a").unwrap();
    store.create("b").unwrap();
    let id_c = store.create("c").unwrap();

    for step in 0..4 {
        match step {
            0 => {}
            1 => {
                store.toggle(id_a);
            }
            2 => {
                store.toggle(id_c);
            }
            _ => {
                store.clear_completed();
            }
        }
        store.set_filter(Filter::Active);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.incomplete_count, snapshot.visible.len());
    }
}

#[test]
fn snapshot_reflects_filter_and_flags() {
    let mut store = test_store();
    let done = store.create("done").unwrap();
    store.create("open").unwrap();
    store.toggle(done);

    let all = store.snapshot();
    assert_eq!(all.filter, Filter::All);
    assert_eq!(all.total, 2);
    assert_eq!(all.visible.len(), 2);
    assert!(all.any_completed);
    assert_eq!(all.incomplete_count, 1);

    store.set_filter(Filter::Completed);
    let completed = store.snapshot();
    assert_eq!(completed.visible.len(), 1);
    assert_eq!(completed.visible[0].id, done);

    store.set_filter(Filter::Active);
    let active = store.snapshot();
    assert_eq!(active.visible.len(), 1);
    assert_eq!(active.visible[0].text, "open");
}

#[test]
fn every_mutation_rewrites_the_full_payload() {
    let mut store = test_store();

    let id = store.create("a").unwrap();
    assert_eq!(saved_texts(&store), ["a"]);

    store.create("b").unwrap();
    assert_eq!(saved_texts(&store), ["b", "a"]);

    store.toggle(id);
    let saved = decode_tasks(store.storage().raw().unwrap());
    assert!(saved.iter().any(|task| task.id == id && task.completed));

    store.clear_completed();
    assert_eq!(saved_texts(&store), ["b"]);

    let last = store.tasks()[0].id;
    store.remove(last);
    assert_eq!(saved_texts(&store), Vec::<String>::new());
}

#[test]
fn filter_selection_is_transient_and_never_persisted() {
    let mut store = test_store();
    store.create("task").unwrap();
    store.set_filter(Filter::Completed);

    let raw = store.storage().raw().unwrap().to_string();
    assert!(!raw.contains("filter"));

    let reopened = TaskListStore::open(MemoryStorage::with_payload(raw));
    assert_eq!(reopened.filter(), Filter::All);
}

#[test]
fn scenario_buy_milk_lifecycle() {
    let mut store = test_store();

    let id = store.create("Buy milk").unwrap();
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text, "Buy milk");
    assert!(!store.tasks()[0].completed);

    store.toggle(id);
    assert!(store.tasks()[0].completed);

    store.set_filter(Filter::Active);
    assert!(store.snapshot().visible.is_empty());

    store.set_filter(Filter::Completed);
    let completed = store.snapshot();
    assert_eq!(completed.visible.len(), 1);
    assert_eq!(completed.visible[0].id, id);

    store.clear_completed();
    assert!(store.tasks().is_empty());
}
