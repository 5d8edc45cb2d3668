use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
    price: u32,
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get_item("token"), None);
}

#[test]
fn memory_storage_set_then_remove() {
    let storage = MemoryStorage::default();
    storage.set_item("token", "abc");
    assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
    storage.remove_item("token");
    assert_eq!(storage.get_item("token"), None);
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let storage = MemoryStorage::default();
    storage.set_item("k", "one");
    storage.set_item("k", "two");
    assert_eq!(storage.get_item("k").as_deref(), Some("two"));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_json_then_load_json() {
    let storage = MemoryStorage::default();
    let draft = Draft { title: "Les Paul".to_owned(), price: 1200 };
    save_json(&storage, "draft", &draft);
    assert_eq!(load_json::<Draft>(&storage, "draft"), Some(draft));
}

#[test]
fn load_json_treats_garbage_as_absent() {
    let storage = MemoryStorage::default();
    storage.set_item("draft", "{not json");
    assert_eq!(load_json::<Draft>(&storage, "draft"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_in_native_tests() {
    let storage = BrowserStorage;
    storage.set_item("token", "abc");
    assert_eq!(storage.get_item("token"), None);
}
