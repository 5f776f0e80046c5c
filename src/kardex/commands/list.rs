use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{StateBackend, Store};

pub fn run<B: StateBackend>(store: &Store<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(store.list()))
}
