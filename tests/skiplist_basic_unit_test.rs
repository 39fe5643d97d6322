use skiplist::SkipList;
use std::collections::BTreeMap;

/// Test fixture: a list pre-populated with a few out-of-order keys
fn create_test_list() -> SkipList<i32, String> {
    let mut list = SkipList::new();
    list.set(5, "a".to_string());
    list.set(2, "b".to_string());
    list.set(8, "c".to_string());
    list
}

fn walk_keys(list: &SkipList<i32, String>) -> Vec<i32> {
    let mut keys = Vec::new();
    let mut entry = list.front();
    while let Some(e) = entry {
        keys.push(*e.key());
        entry = e.next();
    }
    keys
}

#[test]
fn test_set_get_roundtrip() {
    let mut list = SkipList::new();

    assert_eq!(list.set(1, "one"), None);
    assert_eq!(list.get(&1), Some(&"one"));
    assert_eq!(list.get(&2), None);
    assert_eq!(list.len(), 1);
    assert!(!list.is_empty());
}

#[test]
fn test_update_replaces_value_in_place() {
    let mut list = create_test_list();

    // Updating an existing key must not create a second entry
    let old = list.set(5, "z".to_string());
    assert_eq!(old, Some("a".to_string()));
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(&5), Some(&"z".to_string()));
}

#[test]
fn test_update_keeps_entry_height() {
    let mut list: SkipList<i32, i32> = SkipList::with_max_level_and_seed(18, 42).unwrap();
    for i in 0..64 {
        list.set(i, i);
    }

    let heights: Vec<usize> = (0..64).map(|i| list.get_entry(&i).unwrap().height()).collect();

    // Overwrite every value; no entry may be re-leveled
    for i in 0..64 {
        list.set(i, i * 10);
    }
    for i in 0..64usize {
        assert_eq!(
            list.get_entry(&(i as i32)).unwrap().height(),
            heights[i],
            "height of key {} changed on update",
            i
        );
    }
}

#[test]
fn test_set_smaller_key_inserts_new_entry() {
    let mut list = SkipList::new();
    list.set(10, "ten");

    // A strictly smaller key must insert, never be mistaken for an update
    // of the greater candidate found at level 0.
    assert_eq!(list.set(5, "five"), None);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(&10), Some(&"ten"));
    assert_eq!(list.get(&5), Some(&"five"));
}

#[test]
fn test_remove_returns_owned_pair() {
    let mut list = create_test_list();

    let removed = list.remove(&2);
    assert_eq!(removed, Some((2, "b".to_string())));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(&2), None);
}

#[test]
fn test_remove_absent_is_idempotent() {
    let mut list = create_test_list();
    let len_before = list.len();

    assert_eq!(list.remove(&99), None);
    assert_eq!(list.remove(&99), None);
    assert_eq!(list.len(), len_before);
}

#[test]
fn test_remove_then_get_is_absent() {
    let mut list = SkipList::new();
    list.set("k".to_string(), vec![1u8, 2, 3]);

    assert_eq!(list.remove(&"k".to_string()), Some(("k".to_string(), vec![1, 2, 3])));
    assert_eq!(list.get(&"k".to_string()), None);
    assert!(list.is_empty());
}

#[test]
fn test_get_mut_updates_value() {
    let mut list = create_test_list();

    if let Some(value) = list.get_mut(&8) {
        value.push_str("c");
    }
    assert_eq!(list.get(&8), Some(&"cc".to_string()));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_mixed_workload_scenario() {
    let mut list = SkipList::new();
    list.set(5, "a".to_string());
    list.set(2, "b".to_string());
    list.set(8, "c".to_string());
    list.set(5, "z".to_string());

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(&5), Some(&"z".to_string()));
    assert_eq!(walk_keys(&list), vec![2, 5, 8]);

    let removed = list.remove(&2);
    assert_eq!(removed, Some((2, "b".to_string())));
    assert_eq!(walk_keys(&list), vec![5, 8]);
    assert_eq!(list.get(&2), None);
}

#[test]
fn test_contains_key() {
    let list = create_test_list();

    assert!(list.contains_key(&2));
    assert!(list.contains_key(&8));
    assert!(!list.contains_key(&3));
}

#[test]
fn test_reinsert_after_remove() {
    let mut list = SkipList::new();
    list.set(1, "first");
    list.remove(&1);

    assert_eq!(list.set(1, "second"), None);
    assert_eq!(list.get(&1), Some(&"second"));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_matches_btreemap_oracle() {
    // Drive the list and a BTreeMap with the same operation sequence and
    // check they agree on contents, order, and size throughout.
    let mut list: SkipList<u32, u32> = SkipList::with_max_level_and_seed(18, 7).unwrap();
    let mut oracle: BTreeMap<u32, u32> = BTreeMap::new();

    // A fixed pseudo-random schedule keeps the test reproducible
    let mut state: u32 = 0x9e3779b9;
    for step in 0..5000u32 {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        let key = state % 512;

        if state % 3 == 0 {
            assert_eq!(list.remove(&key), oracle.remove_entry(&key), "step {}", step);
        } else {
            assert_eq!(list.set(key, step), oracle.insert(key, step), "step {}", step);
        }
        assert_eq!(list.len(), oracle.len(), "step {}", step);
    }

    let listed: Vec<(u32, u32)> = list.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u32, u32)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(listed, expected);
}
