//! Handlebars views with layouts and partials for axum applications.
//!
//! Views render in two stages: the view template is compiled against the
//! request's data first, and its output is substituted into a layout at
//! the `{{{body}}}` placeholder. Partials found in the configured partials
//! directory are compiled once, at startup, and are available to every
//! template as `{{> name}}`. A small set of comparison and logic helpers
//! (`eq`, `ne`, `lt`, `gt`, `lte`, `gte`, `and`, `or`) is registered
//! alongside them.
//!
//! # Getting started
//!
//! Mount the engine on your router. Static files are served out of
//! `public/`, views are looked up in `views/`:
//!
//! ```no_run
//! use axum::{routing::get, Extension, Router};
//! use axum_hbs::{mount, view, EngineConfig, Error, SharedEngine};
//!
//! async fn index(
//!     Extension(engine): Extension<SharedEngine>,
//! ) -> Result<axum::response::Response, Error> {
//!     view("index", serde_json::json!({"name": "world"}))?
//!         .render(&engine)
//!         .await
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let app = Router::new().route("/", get(index));
//!
//! let app = mount(
//!     app,
//!     EngineConfig::new()
//!         .layouts_dir("views/layouts")
//!         .partials_dir("views/partials")
//!         .default_layout("main"),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! A layout is an ordinary template wrapping the rendered view:
//!
//! ```handlebars
//! <html>
//!   <body>{{{body}}}</body>
//! </html>
//! ```
//!
//! Handlers pick a different layout per response with
//! [`View::layout`](view::View::layout), or by setting the `layout` key
//! in the render data.
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod router;
pub mod view;

pub use config::EngineConfig;
pub use error::Error;
pub use logging::Logger;
pub use router::{mount, SharedEngine};
pub use view::{view, Engine, View};

/// Serde is used for view data (de)serialization.
pub use serde;
/// Tokio is the asynchronous runtime this crate runs on.
pub use tokio;
