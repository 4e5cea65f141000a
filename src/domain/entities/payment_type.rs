use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTypePayload {
    pub name: String,
}

impl ResourceRecord for PaymentType {
    type Payload = PaymentTypePayload;

    const RESOURCE: &'static str = "payment-types";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
