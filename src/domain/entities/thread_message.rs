use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of an assignment conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub id: i64,
    pub assignment_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
