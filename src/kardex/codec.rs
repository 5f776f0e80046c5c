//! Textual encoding of the record collection.
//!
//! The persisted resource is a JSON array of records in store order. An empty
//! store encodes as the explicit `[]` marker, never an absent file, so a
//! missing file and an emptied store stay distinguishable.

use crate::error::Result;
use crate::model::Record;

/// Encode the record sequence for persistence.
pub fn encode(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Decode persisted text back into records. Anything that is not a JSON
/// array of `{id, name, condition}` objects is malformed.
pub fn decode(text: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(text)?)
}
