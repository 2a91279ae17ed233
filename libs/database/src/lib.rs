//! Database connectors used at application startup
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! match mongodb::connect(&config).await {
//!     Ok(client) => { /* use client.database("mydb") */ }
//!     Err(e) => { /* caller decides whether to continue without a database */ }
//! }
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
