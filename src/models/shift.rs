//! Driver shift model.

use serde::{Deserialize, Serialize};

/// A driver's scheduled shift.
///
/// Owned by `driver_id`; only that driver or an admin may delete it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Surrogate key assigned by the store
    pub id: i64,
    /// Owning driver
    pub driver_id: i64,
    /// Day of week
    pub day: String,
    /// Shift start time
    pub shift_start: String,
    /// Shift end time
    pub shift_end: String,
    /// Backup driver, if one is assigned
    pub driver_backup_id: Option<i64>,
}
