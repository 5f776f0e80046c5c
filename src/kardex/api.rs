//! # API Facade
//!
//! Thin facade over the command layer: the single entry point for every
//! inventory operation, regardless of the UI driving it. Generic over
//! [`StateBackend`] so it runs against `FileBackend` in production and
//! `MemoryBackend` in tests.
//!
//! The facade dispatches and nothing else. Business rules live in the
//! commands and the store; rendering lives with the caller.

use crate::commands;
use crate::error::Result;
use crate::store::{StateBackend, Store};

pub struct KardexApi<B: StateBackend> {
    store: Store<B>,
}

impl<B: StateBackend> KardexApi<B> {
    /// Open the store from the backend, loading any persisted state.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: Store::open(backend)?,
        })
    }

    pub fn add_record(
        &mut self,
        id: String,
        name: String,
        condition: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, id, name, condition)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_record(&mut self, update: &commands::RecordUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, update)
    }

    pub fn delete_record(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, RecordUpdate};
