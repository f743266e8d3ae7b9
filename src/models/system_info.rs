//! Static application info surfaced to admins.

use serde::Serialize;

/// Build and deployment information, typically environment values the
/// frontend needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub source_repo: String,
    pub commit_id: Option<String>,
    pub commit_message: Option<String>,
}
