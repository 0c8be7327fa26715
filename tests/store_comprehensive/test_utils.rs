//! Shared helpers for the store suite

use std::sync::Once;

use dotstore::DocStore;
use tempfile::TempDir;

static INIT_TRACING: Once = Once::new();

/// Install a subscriber once so load/save diagnostics show up under
/// `--nocapture`.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// A store over a file that does not exist yet, in a fresh temp dir.
/// Keep the `TempDir` alive for the duration of the test.
pub fn temp_store(name: &str) -> (TempDir, DocStore) {
    init_tracing();
    let dir = TempDir::new().expect("create temp dir");
    let store = DocStore::open(dir.path().join(name));
    (dir, store)
}

/// A store opened over a file pre-seeded with `json`.
pub fn seeded_store(name: &str, json: serde_json::Value) -> (TempDir, DocStore) {
    init_tracing();
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(&json).expect("serialize seed"))
        .expect("write seed file");
    let store = DocStore::open(path);
    (dir, store)
}
