//! Single-record snapshot persistence.
//!
//! A submitted invoice is stored as one JSON text blob under a fixed key in
//! a local key-value backend, and read back when the preview opens. There is
//! only ever one record; saving again replaces it.
//!
//! # Example
//!
//! ```
//! use invoicegen::core::*;
//! use invoicegen::storage::*;
//!
//! let mut store = SnapshotStore::new(MemoryBackend::default());
//! assert!(store.load().unwrap().is_none());
//!
//! let mut draft = InvoiceDraft::new();
//! draft.client_name("Acme").client_address("Pune").gst_number("27ABCDE1234F1Z5");
//! *draft.line_mut(0).unwrap() = DraftLine::new("Widget", "2", "100");
//!
//! let snapshot = draft.submit().unwrap();
//! store.save(&snapshot).unwrap();
//! assert_eq!(store.load().unwrap(), Some(snapshot));
//! ```

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::core::{InvoiceError, InvoiceSnapshot};

/// Key under which the current invoice record is stored.
pub const SNAPSHOT_KEY: &str = "invoiceData";

/// A string-keyed store of text blobs.
pub trait KeyValueBackend {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, InvoiceError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<(), InvoiceError>;

    /// Delete the blob under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), InvoiceError>;
}

/// Saves and loads the one invoice snapshot kept by a backend.
#[derive(Debug)]
pub struct SnapshotStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> SnapshotStore<B> {
    /// Store under the standard [`SNAPSHOT_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, SNAPSHOT_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Serialize and store `snapshot`, replacing the previous record.
    pub fn save(&mut self, snapshot: &InvoiceSnapshot) -> Result<(), InvoiceError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| InvoiceError::Serialization(e.to_string()))?;
        self.backend.set(&self.key, &json)?;
        tracing::info!(
            key = %self.key,
            invoice_id = %snapshot.invoice_id,
            bytes = json.len(),
            "invoice snapshot saved"
        );
        Ok(())
    }

    /// Load the stored record. A missing record is `Ok(None)`.
    pub fn load(&self) -> Result<Option<InvoiceSnapshot>, InvoiceError> {
        let Some(json) = self.backend.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no invoice snapshot stored");
            return Ok(None);
        };
        let snapshot: InvoiceSnapshot = serde_json::from_str(&json)
            .map_err(|e| InvoiceError::Serialization(e.to_string()))?;
        tracing::debug!(key = %self.key, invoice_id = %snapshot.invoice_id, "invoice snapshot loaded");
        Ok(Some(snapshot))
    }

    /// Drop the stored record.
    pub fn clear(&mut self) -> Result<(), InvoiceError> {
        self.backend.remove(&self.key)
    }
}
