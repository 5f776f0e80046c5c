use crate::commands::{CmdMessage, CmdResult, RecordUpdate};
use crate::error::Result;
use crate::store::{StateBackend, Store};

pub fn run<B: StateBackend>(store: &mut Store<B>, update: &RecordUpdate) -> Result<CmdResult> {
    let record = store.update(
        &update.id,
        update.new_id.as_deref(),
        &update.name,
        &update.condition,
    )?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated: {}",
        record.id
    )));
    result.affected_records.push(record);
    Ok(result)
}
