use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The current user's authenticated identity, held as an opaque token in the
/// session cookie and resolved server-side on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub token: Uuid,
    pub profile_id: i64,
    pub created_at: DateTime<Utc>,
}
