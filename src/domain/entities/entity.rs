use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use serde::{Deserialize, Serialize};

/// A party involved in an expertise file: insurer, repair shop, owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ResourceRecord for Entity {
    type Payload = EntityPayload;

    const RESOURCE: &'static str = "entities";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
