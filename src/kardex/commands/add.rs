use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StateBackend, Store};

pub fn run<B: StateBackend>(
    store: &mut Store<B>,
    id: String,
    name: String,
    condition: String,
) -> Result<CmdResult> {
    let record = store.create(id, name, condition)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record added: {}", record.id)));
    result.affected_records.push(record);
    Ok(result)
}
