use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Issued,
    Paid,
    Voided,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub number: String,
    pub assignment_id: i64,
    /// Amount in minor currency units.
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub assignment_id: i64,
    pub amount_cents: i64,
}

impl ResourceRecord for Invoice {
    type Payload = InvoicePayload;

    const RESOURCE: &'static str = "invoices";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
