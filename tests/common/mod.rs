#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rental_core::{
    core::{FixedClock, RolloverOutcome},
    storage::{JsonFileStore, KeyValueStore, MemoryStore},
    store::{seed, RentalStore},
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn clock(y: i32, m: u32, d: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock(date(y, m, d)))
}

/// Opens a store over `backend` on the given day, running the month check.
pub fn open_on(backend: Arc<dyn KeyValueStore>, today: NaiveDate) -> (RentalStore, RolloverOutcome) {
    RentalStore::open(backend, seed::standard_units(), Arc::new(FixedClock(today)))
}

pub fn memory_store(today: NaiveDate) -> (RentalStore, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::new());
    let (store, _) = open_on(backend.clone(), today);
    (store, backend)
}

pub fn json_backend() -> (Arc<JsonFileStore>, PathBuf) {
    let root = temp_base().join("data");
    let backend = JsonFileStore::new(root.clone()).expect("create json store");
    (Arc::new(backend), root)
}
