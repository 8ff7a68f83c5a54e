//! Credential provider implementations

mod env_provider;

pub use env_provider::{default_env_var, EnvCredentialProvider};
