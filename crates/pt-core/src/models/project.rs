//! Project entity - the sole persisted entity of the tracker.

use serde::{Deserialize, Serialize};

/// A project row. `id` is assigned by the database on insert and is never
/// client-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub project_name: String,
    pub project_owner: String,
}
