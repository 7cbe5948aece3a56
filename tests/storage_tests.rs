#![cfg(feature = "storage")]

use invoicegen::core::*;
use invoicegen::storage::*;
use rust_decimal_macros::dec;

fn snapshot() -> InvoiceSnapshot {
    let mut draft = InvoiceDraft::with_id(InvoiceId::new(1_234_567_890).unwrap());
    draft
        .client_name("Acme Traders")
        .client_address("12 MG Road, Pune")
        .gst_number("27ABCDE1234F1Z5")
        .discount("10");
    *draft.line_mut(0).unwrap() = DraftLine::new("Pens", "1", "50").tax_rate("10");
    draft.add_line_with(DraftLine::new("Paper", "3", "20").tax_rate("5"));
    draft.submit().unwrap()
}

// --- Memory backend ---

#[test]
fn empty_store_loads_none() {
    let store = SnapshotStore::new(MemoryBackend::default());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn memory_save_then_load() {
    let mut store = SnapshotStore::new(MemoryBackend::default());
    let snap = snapshot();
    store.save(&snap).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, snap);
    assert_eq!(loaded.total_due, dec!(106.2));
}

#[test]
fn saving_replaces_the_single_record() {
    let mut store = SnapshotStore::new(MemoryBackend::default());
    let first = snapshot();
    let mut second = snapshot();
    second.client_name = "Other Co".into();

    store.save(&first).unwrap();
    store.save(&second).unwrap();

    assert_eq!(store.backend().len(), 1);
    assert_eq!(store.load().unwrap().unwrap().client_name, "Other Co");
}

#[test]
fn clear_returns_to_loading_state() {
    let mut store = SnapshotStore::new(MemoryBackend::default());
    store.save(&snapshot()).unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn corrupt_blob_is_a_serialization_error() {
    let mut backend = MemoryBackend::default();
    backend.set(SNAPSHOT_KEY, "{not json").unwrap();
    let store = SnapshotStore::new(backend);

    let err = store.load().unwrap_err();
    assert!(matches!(err, InvoiceError::Serialization(_)), "{err}");
}

// --- Stored record shape ---

#[test]
fn record_uses_fixed_key_and_field_names() {
    let mut store = SnapshotStore::new(MemoryBackend::default());
    store.save(&snapshot()).unwrap();
    assert_eq!(store.key(), "invoiceData");

    let raw = store.backend().get("invoiceData").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    for key in [
        "clientName",
        "clientAddress",
        "gstNumber",
        "discount",
        "items",
        "invoiceId",
        "subTotal",
        "gstAmount",
        "discountAmount",
        "taxableAmount",
        "sgst",
        "cgst",
        "totalDue",
    ] {
        assert!(json.get(key).is_some(), "missing {key} in {raw}");
    }
    assert_eq!(json["invoiceId"], "1234567890");
    assert_eq!(json["items"][0]["qty"], "1");
    assert_eq!(json["items"][0]["description"], "Pens");
    // Unset optional fields are left out
    assert!(json.get("invoiceDate").is_none());
}

#[test]
fn record_with_numeric_amounts_still_loads() {
    let json = r#"{
        "invoiceId": "42",
        "clientName": "Acme",
        "clientAddress": "Pune",
        "gstNumber": "27ABCDE1234F1Z5",
        "discount": 0,
        "items": [
            {"description": "Widget", "qty": 2, "price": 100, "taxRate": 18,
             "base": 200, "tax": 36, "sgst": 18, "cgst": 18, "amount": 236}
        ],
        "subTotal": 200,
        "gstAmount": 36,
        "sgst": 18,
        "cgst": 18,
        "discountAmount": 0,
        "taxableAmount": 236,
        "totalDue": 236
    }"#;
    let mut backend = MemoryBackend::default();
    backend.set(SNAPSHOT_KEY, json).unwrap();

    let snap = SnapshotStore::new(backend).load().unwrap().unwrap();
    assert_eq!(snap.invoice_id.value(), 42);
    assert_eq!(snap.items[0].amount, dec!(236));
    assert_eq!(snap.total_due, dec!(236));
}

// --- File backend ---

#[test]
fn file_store_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let snap = snapshot();

    let mut store = SnapshotStore::new(FileBackend::new(dir.path()));
    store.save(&snap).unwrap();
    assert!(dir.path().join("invoiceData.json").exists());

    let reopened = SnapshotStore::new(FileBackend::new(dir.path()));
    assert_eq!(reopened.load().unwrap(), Some(snap));
}

#[test]
fn file_store_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");

    let mut store = SnapshotStore::new(FileBackend::new(&nested));
    assert!(store.load().unwrap().is_none());
    store.save(&snapshot()).unwrap();
    assert!(nested.join("invoiceData.json").exists());

    store.clear().unwrap();
    assert!(!nested.join("invoiceData.json").exists());
    // Clearing again is harmless
    store.clear().unwrap();
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SnapshotStore::with_key(FileBackend::new(dir.path()), "../outside");
    let err = store.save(&snapshot()).unwrap_err();
    assert!(matches!(err, InvoiceError::Storage(_)), "{err}");
}
