//! HTTP handlers: thin shims that bind path and body, call the service, map the result.

pub mod common;
pub mod departments;
pub mod equipment;
pub mod requests;
