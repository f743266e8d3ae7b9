//! User model, referenced by rides and shifts.

use serde::{Deserialize, Serialize};

/// A user account with role flags.
///
/// This service only reads accounts and toggles the two role flags;
/// account creation and profile management live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    /// May act on admin-scoped routes
    pub admin: bool,
    /// May own and delete shifts
    pub driver: bool,
    pub email: Option<String>,
    pub full_name: Option<String>,
}
