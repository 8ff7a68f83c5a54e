//! Infrastructure layer - External service implementations

pub mod credentials;
pub mod gateway_client;
pub mod llm;
pub mod logging;
pub mod observability;

pub use gateway_client::HttpGatewayClient;
pub use logging::{init_logging, truncate_for_log};
