use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the hosted `todos` table.
///
/// The field set mirrors the service's schema exactly; `task` and
/// `is_complete` are nullable columns there. Ownership is carried by
/// `user_id` and enforced by the service's row-level rules, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub inserted_at: DateTime<Utc>,
    pub is_complete: Option<bool>,
    pub task: Option<String>,
    pub user_id: Uuid,
}

impl Todo {
    /// A null completion column counts as not complete.
    pub fn completed(&self) -> bool {
        self.is_complete.unwrap_or(false)
    }
}
