pub mod assignment;
pub mod assignment_type;
pub mod bank_check;
pub mod color;
pub mod entity;
pub mod invoice;
pub mod payment_type;
pub mod record;
pub mod thread_message;
pub mod vehicle;

pub use assignment::{Assignment, AssignmentPayload, AssignmentStatus};
pub use assignment_type::{AssignmentType, AssignmentTypePayload};
pub use bank_check::{BankCheck, BankCheckPayload};
pub use color::{Color, ColorPayload};
pub use entity::{Entity, EntityPayload};
pub use invoice::{Invoice, InvoicePayload, InvoiceStatus};
pub use payment_type::{PaymentType, PaymentTypePayload};
pub use record::ResourceRecord;
pub use thread_message::ThreadMessage;
pub use vehicle::{
    Vehicle, VehicleBrand, VehicleBrandPayload, VehicleModel, VehicleModelPayload, VehiclePayload,
};
