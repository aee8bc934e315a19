use super::*;
use crate::net::mock;
use crate::net::types::Pillar;

fn criterion(id: u32, description: &str) -> Criterion {
    Criterion { id, pillar: Pillar::Quality, description: description.to_owned(), weight: 3 }
}

fn loaded() -> RecordList<Criterion> {
    let mut list = RecordList::default();
    list.load(vec![criterion(1, "a"), criterion(4, "b")]);
    list
}

#[test]
fn default_list_is_loading_and_empty() {
    let list = RecordList::<Badge>::default();
    assert!(list.loading);
    assert!(list.items.is_empty());
    assert_eq!(list.next_id(), 1);
}

#[test]
fn load_clears_loading_flag() {
    let mut list = RecordList::default();
    list.load(mock::companies());
    assert!(!list.loading);
    assert_eq!(list.items.len(), 2);
}

#[test]
fn upsert_with_zero_id_appends_with_next_id() {
    let mut list = loaded();
    let id = list.upsert(criterion(0, "c"));
    assert_eq!(id, 5);
    assert_eq!(list.items.last().map(|c| c.description.as_str()), Some("c"));
    assert_eq!(list.items.len(), 3);
}

#[test]
fn upsert_existing_id_replaces_in_place() {
    let mut list = loaded();
    let id = list.upsert(criterion(1, "edited"));
    assert_eq!(id, 1);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].description, "edited");
    assert_eq!(list.items[1].description, "b");
}

#[test]
fn upsert_unknown_nonzero_id_is_kept() {
    let mut list = loaded();
    assert_eq!(list.upsert(criterion(9, "z")), 9);
    assert_eq!(list.get(9).map(|c| c.description.as_str()), Some("z"));
}

#[test]
fn remove_only_matching_record() {
    let mut list = loaded();
    assert!(list.remove(1));
    assert!(!list.remove(1));
    assert_eq!(list.items, vec![criterion(4, "b")]);
}
