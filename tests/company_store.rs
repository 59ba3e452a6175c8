//! Company Service over the JSON File Store
//!
//! Service semantics checked against a real data file:
//! - missing file bootstrap, including under concurrent readers
//! - round trip and read idempotence
//! - terminal deletes
//! - serialized writers do not lose concurrent mutations

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use serde_json::Value;
use tempfile::TempDir;

use company_api::company::CompanyName;
use company_api::observability::{Event, MemoryEventLog};
use company_api::service::CompanyService;
use company_api::storage::{JsonFileStore, RecordStore};

// =============================================================================
// Test Utilities
// =============================================================================

struct Fixture {
    service: Arc<CompanyService>,
    store: Arc<JsonFileStore>,
    log: MemoryEventLog,
    _temp: TempDir,
}

fn fixture() -> Fixture {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = MemoryEventLog::new();
    let store = Arc::new(JsonFileStore::new(
        temp.path().join("data").join("data.json"),
        Arc::new(log.clone()),
    ));
    let service = Arc::new(CompanyService::new(store.clone(), Arc::new(log.clone())));
    Fixture {
        service,
        store,
        log,
        _temp: temp,
    }
}

fn name(s: &str) -> CompanyName {
    CompanyName::parse(s).unwrap()
}

fn on_disk(store: &JsonFileStore) -> Value {
    serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap()
}

// =============================================================================
// Bootstrap
// =============================================================================

#[test]
fn test_deleted_file_is_recreated_empty() {
    let f = fixture();
    f.service.create(name("Acme")).unwrap();

    fs::remove_file(f.store.path()).unwrap();

    assert!(f.service.get_all().unwrap().is_empty());
    assert_eq!(fs::read_to_string(f.store.path()).unwrap(), "[]");
    assert!(f.log.contains(Event::StoreInitialized));
}

#[test]
fn test_deleted_directory_is_recreated() {
    let f = fixture();
    f.service.create(name("Acme")).unwrap();

    fs::remove_dir_all(f.store.path().parent().unwrap()).unwrap();

    let created = f.service.create(name("Globex")).unwrap();
    assert_eq!(f.service.get_all().unwrap(), vec![created]);
}

#[test]
fn test_bootstrap_race_never_drops_a_create() {
    for _ in 0..100 {
        let f = fixture();
        let barrier = Arc::new(Barrier::new(3));

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let service = f.service.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..3 {
                        service.get_all().unwrap();
                    }
                })
            })
            .collect();
        let writer = {
            let service = f.service.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                service.create(name("Acme")).unwrap()
            })
        };

        let created = writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(f.service.get_by_id(&created.id).unwrap(), Some(created));
        assert_eq!(on_disk(&f.store).as_array().unwrap().len(), 1);
    }
}

// =============================================================================
// CRUD properties
// =============================================================================

#[test]
fn test_create_round_trips_through_file() {
    let f = fixture();

    let created = f.service.create(name("Acme")).unwrap();

    let fetched = f.service.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Acme");
    assert_eq!(on_disk(&f.store)[0]["id"], created.id.as_str());
}

#[test]
fn test_reads_are_idempotent() {
    let f = fixture();
    f.service.create(name("Acme")).unwrap();
    f.service.create(name("Globex")).unwrap();

    let first = f.service.get_all().unwrap();
    let second = f.service.get_all().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_delete_then_second_delete_is_false() {
    let f = fixture();
    let created = f.service.create(name("Acme")).unwrap();

    assert!(f.service.delete(&created.id).unwrap());
    assert!(f.service.get_by_id(&created.id).unwrap().is_none());
    assert!(!f.service.delete(&created.id).unwrap());
    assert_eq!(on_disk(&f.store), Value::Array(vec![]));
}

#[test]
fn test_store_reads_match_service_view() {
    let f = fixture();
    f.service.create(name("Acme")).unwrap();

    assert_eq!(f.store.read_all().unwrap(), f.service.get_all().unwrap());
}

// =============================================================================
// Single writer
// =============================================================================

#[test]
fn test_concurrent_creates_are_all_kept() {
    let f = fixture();
    let threads = 8;
    let per_thread = 5;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let service = f.service.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    service.create(name(&format!("company-{t}-{i}"))).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let all = f.service.get_all().unwrap();
    assert_eq!(all.len(), threads * per_thread);

    let mut ids: Vec<_> = all.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), threads * per_thread);
}

#[test]
fn test_concurrent_updates_and_deletes_do_not_resurrect() {
    let f = fixture();
    let keep = f.service.create(name("keep")).unwrap();
    let doomed: Vec<_> = (0..10)
        .map(|i| f.service.create(name(&format!("doomed-{i}"))).unwrap())
        .collect();

    let deleter = {
        let service = f.service.clone();
        let ids: Vec<_> = doomed.iter().map(|c| c.id.clone()).collect();
        thread::spawn(move || {
            for id in ids {
                assert!(service.delete(&id).unwrap());
            }
        })
    };
    let updater = {
        let service = f.service.clone();
        let id = keep.id.clone();
        thread::spawn(move || {
            for i in 0..10 {
                service.update(&id, name(&format!("keep-{i}"))).unwrap();
            }
        })
    };
    deleter.join().unwrap();
    updater.join().unwrap();

    let all = f.service.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
    assert_eq!(all[0].name, "keep-9");
}
