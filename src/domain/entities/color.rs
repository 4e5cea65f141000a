use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ResourceRecord for Color {
    type Payload = ColorPayload;

    const RESOURCE: &'static str = "colors";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
