use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleBrand {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleBrandPayload {
    pub name: String,
}

impl ResourceRecord for VehicleBrand {
    type Payload = VehicleBrandPayload;

    const RESOURCE: &'static str = "vehicle-brands";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}

/// Model rows are always scoped by a `brand_id` filter on the list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: i64,
    pub name: String,
    pub brand_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModelPayload {
    pub name: String,
    pub brand_id: i64,
}

impl ResourceRecord for VehicleModel {
    type Payload = VehicleModelPayload;

    const RESOURCE: &'static str = "vehicle-models";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    #[serde(default)]
    pub vin: Option<String>,
    pub brand_id: i64,
    pub vehicle_model_id: i64,
    #[serde(default)]
    pub color_id: Option<i64>,
    #[serde(default)]
    pub year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePayload {
    pub plate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    pub brand_id: i64,
    pub vehicle_model_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl ResourceRecord for Vehicle {
    type Payload = VehiclePayload;

    const RESOURCE: &'static str = "vehicles";

    fn record_id(&self) -> RecordId {
        RecordId::Number(self.id)
    }
}
