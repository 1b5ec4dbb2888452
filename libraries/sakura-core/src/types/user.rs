/// User domain type
use super::UserId;
use serde::{Deserialize, Serialize};

/// User account as seen by the rest of the application
///
/// The persisted record additionally carries a password hash; that record
/// never leaves the auth crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Sign-in email
    pub email: String,

    /// Display name
    pub display_name: String,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Account creation timestamp (RFC 3339 string)
    pub created_at: String,
}
