//! End-to-end behavior of the configuration store over real storage backends.

#![cfg(all(feature = "file-storage", feature = "bootstrap"))]

use agent_config::{
    init_tracing, sanitize_api_key, AgentConfig, ConfigPatch, ConfigStore, FileStorage,
    KeyValueStorage, MemoryStorage, DEFAULT_MODEL, STORAGE_KEY,
};

#[test]
fn sanitizer_examples() {
    assert_eq!(sanitize_api_key("  sk-abc123  "), "sk-abc123");
    assert_eq!(sanitize_api_key("prefix sk-XYZ789 suffix"), "sk-XYZ789");
    assert_eq!(sanitize_api_key("no-key-here"), "no-key-here");
    assert_eq!(sanitize_api_key(""), "");
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut store = ConfigStore::open(storage.clone());
    store.apply(ConfigPatch::api_key("  sk-test1  ")).unwrap();

    let fresh = ConfigStore::open(storage);
    assert_eq!(fresh.current().api_key, "sk-test1");
    assert_eq!(fresh.current().model, DEFAULT_MODEL);
}

#[test]
fn file_store_ignores_corrupt_record() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set(STORAGE_KEY, "\u{0}garbage").unwrap();

    let mut store = ConfigStore::open(storage.clone());
    assert_eq!(store.current(), &AgentConfig::default());

    // The next write replaces the corrupt record.
    store.apply(ConfigPatch::model("gpt-4o-mini")).unwrap();
    let fresh = ConfigStore::open(storage);
    assert_eq!(fresh.current().model, "gpt-4o-mini");
    assert_eq!(fresh.current().api_key, "");
}

#[test]
fn stores_over_one_medium_see_last_write() {
    let storage = MemoryStorage::new();
    let mut tab_a = ConfigStore::open(storage.clone());
    let mut tab_b = ConfigStore::open(storage.clone());

    tab_a.apply(ConfigPatch::api_key("sk-fromA")).unwrap();
    tab_b.apply(ConfigPatch::model("o1")).unwrap();

    // tab_b never loaded tab_a's key, so its full rewrite drops it.
    let fresh = ConfigStore::open(storage);
    assert_eq!(fresh.current().api_key, "");
    assert_eq!(fresh.current().model, "o1");
}

#[test]
fn init_tracing_only_installs_once() {
    init_tracing("agent_config=debug");
    assert!(!init_tracing("agent_config=trace"));
}
