//! Authentication module
//!
//! Supports: Bearer
//!
//! The upstream API only accepts a static bearer token, so there is no token
//! refresh or caching here.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
