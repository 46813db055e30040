//! Persistence of the submitted-record sequence.
//!
//! Read-modify-write over an opaque blob: load the full sequence, append,
//! write the full sequence back within one synchronous operation. A missing
//! or corrupt blob degrades to an empty sequence rather than blocking the
//! submit flow.

use tracing::warn;

use regform_model::StoredRecord;

use crate::ports::StorageBlob;

/// Fixed storage key for the submitted-record sequence.
pub const STORAGE_KEY: &str = "students";

/// Load the stored record sequence, defaulting to empty on absent or
/// corrupt data.
pub fn load_records(storage: &dyn StorageBlob) -> Vec<StoredRecord> {
    let Some(raw) = storage.get(STORAGE_KEY) else {
        return Vec::new();
    };
    match StoredRecord::decode_sequence(&raw) {
        Ok(records) => records,
        Err(error) => {
            warn!(%error, "stored records are unreadable, starting a fresh sequence");
            Vec::new()
        }
    }
}

/// Append one record to the stored sequence, best-effort.
pub(crate) fn append_record(storage: &mut dyn StorageBlob, record: StoredRecord) {
    let mut records = load_records(storage);
    records.push(record);
    match StoredRecord::encode_sequence(&records) {
        Ok(encoded) => storage.set(STORAGE_KEY, &encoded),
        Err(error) => warn!(%error, "failed to serialize submitted records"),
    }
}
