use crate::domain::value_objects::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A server-owned record managed through one of the back-office list screens.
pub trait ResourceRecord: Clone + Send + Sync + DeserializeOwned + 'static {
    /// Body sent on create and update calls for this resource.
    type Payload: Serialize + Send + Sync + 'static;

    /// REST collection segment, e.g. `colors`.
    const RESOURCE: &'static str;

    fn record_id(&self) -> RecordId;
}
