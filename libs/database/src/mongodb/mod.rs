//! MongoDB startup connector
//!
//! A single connection attempt that logs its outcome and hands the result back
//! to the caller. Whether a failure is fatal is the caller's decision.

mod config;
mod connector;
mod redact;

pub use config::{MONGODB_URI_ENV, MongoConfig};
pub use connector::{MongoError, REMEDIATION_GUIDANCE, connect};
pub use redact::redact_uri;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Database};
