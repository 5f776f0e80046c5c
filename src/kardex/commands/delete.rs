use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StateBackend, Store};

pub fn run<B: StateBackend>(store: &mut Store<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.delete(id)? {
        result.add_message(CmdMessage::success(format!("Record deleted: {}", id)));
    } else {
        result.add_message(CmdMessage::warning(format!("Record not found: {}", id)));
    }
    Ok(result)
}
