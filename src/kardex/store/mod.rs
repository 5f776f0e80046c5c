//! # Storage layer
//!
//! The persisted resource is abstracted behind the [`StateBackend`] trait so
//! that store logic can be tested against [`memory::MemoryBackend`] without a
//! filesystem, while [`fs::FileBackend`] backs the real data file.
//!
//! [`Store`] owns the in-memory record sequence and orchestrates
//! load-on-open / persist-on-mutation through the backend. Every mutation is
//! built against a candidate copy of the sequence and written through the
//! backend before the in-memory state is swapped, so a failed operation
//! leaves both the store contents and the persisted resource unchanged.

use crate::codec;
use crate::error::{KardexError, Result};
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface to the persisted resource.
pub trait StateBackend {
    /// Read the persisted text, or `None` when no prior state exists.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the persisted text in full.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// The owning record collection: insertion-ordered, unique IDs, persisted
/// through a [`StateBackend`] after every successful mutation.
#[derive(Debug)]
pub struct Store<B: StateBackend> {
    backend: B,
    records: Vec<Record>,
}

impl<B: StateBackend> Store<B> {
    /// Load the store from the backend. An absent resource yields an empty
    /// store; malformed text is surfaced, never repaired.
    pub fn open(backend: B) -> Result<Self> {
        let records = match backend.read()? {
            Some(text) => codec::decode(&text)?,
            None => Vec::new(),
        };
        Ok(Self { backend, records })
    }

    /// Snapshot of the records in insertion order. Never persists.
    pub fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Look up a single record by ID.
    pub fn get(&self, id: &str) -> Option<Record> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a new record and persist the full sequence.
    pub fn create(&mut self, id: String, name: String, condition: String) -> Result<Record> {
        let record = Record::new(id, name, condition)?;
        if self.contains(&record.id) {
            return Err(KardexError::DuplicateId(record.id));
        }

        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;
        Ok(record)
    }

    /// Overwrite all fields of the record at `id`. A `new_id` that is
    /// supplied, non-empty, and different from `id` renames the record;
    /// otherwise the ID is kept. An empty `name` or `condition` aborts the
    /// whole update, leaving the record as it was.
    pub fn update(
        &mut self,
        id: &str,
        new_id: Option<&str>,
        name: &str,
        condition: &str,
    ) -> Result<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| KardexError::NotFound(id.to_string()))?;

        let next_id = match new_id {
            Some(new_id) if !new_id.is_empty() && new_id != id => {
                if self.contains(new_id) {
                    return Err(KardexError::DuplicateId(new_id.to_string()));
                }
                new_id.to_string()
            }
            _ => id.to_string(),
        };

        let record = Record::new(next_id, name.to_string(), condition.to_string())?;
        let mut next = self.records.clone();
        next[pos] = record.clone();
        self.commit(next)?;
        Ok(record)
    }

    /// Remove the record at `id`. Returns whether a removal occurred; an
    /// absent ID is not an error and nothing is persisted for it.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let pos = match self.records.iter().position(|r| r.id == id) {
            Some(pos) => pos,
            None => return Ok(false),
        };

        let mut next = self.records.clone();
        next.remove(pos);
        self.commit(next)?;
        Ok(true)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    // Persist first, swap second: a write failure leaves the sequence as it was.
    fn commit(&mut self, next: Vec<Record>) -> Result<()> {
        let text = codec::encode(&next)?;
        self.backend.write(&text)?;
        self.records = next;
        Ok(())
    }
}
