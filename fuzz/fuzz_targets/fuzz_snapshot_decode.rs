#![no_main]

use invoicegen::storage::{KeyValueBackend, MemoryBackend, SnapshotStore, SNAPSHOT_KEY};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut backend = MemoryBackend::default();
        let _ = backend.set(SNAPSHOT_KEY, s);
        let mut store = SnapshotStore::new(backend);
        // Errors are fine, panics are bugs. A decoded record must re-save.
        if let Ok(Some(snapshot)) = store.load() {
            store.save(&snapshot).unwrap();
            let _ = serde_json::to_string(&snapshot).unwrap();
        }
    }
});
