use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankCheck {
    pub id: i64,
    pub number: String,
    pub bank: String,
    pub amount_cents: i64,
    pub payment_type_id: i64,
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankCheckPayload {
    pub number: String,
    pub bank: String,
    pub amount_cents: i64,
    pub payment_type_id: i64,
}

impl ResourceRecord for BankCheck {
    type Payload = BankCheckPayload;

    const RESOURCE: &'static str = "checks";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
