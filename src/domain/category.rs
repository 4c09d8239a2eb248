//! Domain types representing expense categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Labels ledger activity for breakdowns and budget tracking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub is_default: bool,
}

impl Category {
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            is_default: false,
        }
    }
}
