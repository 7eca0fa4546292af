//! A collection of types and functions which when imported
//! make working with views ergonomic.
//!
//! ```
//! use axum_hbs::prelude::*;
//! ```
pub use crate::config::EngineConfig;
pub use crate::error::Error;
pub use crate::logging::Logger;
pub use crate::router::{mount, SharedEngine};
pub use crate::view::{view, Engine, View};

pub use axum::http::StatusCode;
pub use axum::Extension;

pub use serde::{Deserialize, Serialize};
pub use serde_json::json;
pub use tokio;
