//! Gateway request/result contract shared by server and client

mod request;
mod result;

pub use request::{ChatRequest, INVALID_PROVIDER, INVALID_REQUEST_FORMAT};
pub use result::ChatResult;
