pub mod entities;
pub mod value_objects;

pub use entities::{
    Assignment, AssignmentType, BankCheck, Color, Entity, Invoice, PaymentType, ThreadMessage,
    Vehicle, VehicleBrand, VehicleModel,
};
pub use value_objects::{FilterState, FilterValue, PageCursor, RecordId};
