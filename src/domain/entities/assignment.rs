use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status transitions happen server-side; the client only renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Open,
    InExpertise,
    Closed,
    Cancelled,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Open => "open",
            AssignmentStatus::InExpertise => "in_expertise",
            AssignmentStatus::Closed => "closed",
            AssignmentStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(AssignmentStatus::Open),
            "in_expertise" => Ok(AssignmentStatus::InExpertise),
            "closed" => Ok(AssignmentStatus::Closed),
            "cancelled" => Ok(AssignmentStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// An expertise file tying a vehicle, the requesting entity, and the work type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub reference: String,
    pub entity_id: i64,
    pub vehicle_id: i64,
    pub assignment_type_id: i64,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPayload {
    pub entity_id: i64,
    pub vehicle_id: i64,
    pub assignment_type_id: i64,
}

impl ResourceRecord for Assignment {
    type Payload = AssignmentPayload;

    const RESOURCE: &'static str = "assignments";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
