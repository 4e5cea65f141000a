use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTypePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ResourceRecord for AssignmentType {
    type Payload = AssignmentTypePayload;

    const RESOURCE: &'static str = "assignment-types";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
