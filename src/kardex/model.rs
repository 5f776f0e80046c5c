use serde::{Deserialize, Serialize};

use crate::error::{KardexError, Result};

/// One inventory entry. The operator-supplied `id` is the primary key and is
/// unique within a store; `name` and `condition` are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub condition: String,
}

impl Record {
    /// Build a record, rejecting empty fields. No field is ever defaulted.
    pub fn new(id: String, name: String, condition: String) -> Result<Self> {
        require("ID", &id)?;
        require("Name", &name)?;
        require("Condition", &condition)?;
        Ok(Self {
            id,
            name,
            condition,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(KardexError::InvalidField(field));
    }
    Ok(())
}
