pub mod message_gateway;
pub mod notifier;
pub mod resource_gateway;
pub mod viewport;

pub use message_gateway::MessageGateway;
pub use notifier::UserNotifier;
pub use resource_gateway::{ResourceGateway, ResourcePage};
pub use viewport::ThreadViewport;
