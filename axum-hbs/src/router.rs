//! Wires the view engine and static file serving into an axum application.
use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::services::ServeDir;

use crate::config::EngineConfig;
use crate::error::Error;
use crate::view::Engine;

/// Directory served as static assets, also used as the URL prefix.
const STATIC_DIR: &str = "public";

/// Directory where views are looked up by name.
const VIEWS_DIR: &str = "views";

/// The engine as request handlers see it.
pub type SharedEngine = Arc<Engine>;

/// Mount the view engine on a router.
///
/// Serves static files out of `public/` under the `/public` prefix,
/// points the engine's view lookup at `views/`, and attaches the engine
/// as an extension, so handlers can extract `Extension<SharedEngine>`.
///
/// Engine construction failures (unreadable directories, partials that
/// don't compile) propagate to the caller.
pub fn mount(router: Router, config: EngineConfig) -> Result<Router, Error> {
    let engine = Engine::new(config)?.views(VIEWS_DIR);

    Ok(router
        .nest_service(&format!("/{}", STATIC_DIR), ServeDir::new(STATIC_DIR))
        .layer(Extension(SharedEngine::new(engine))))
}
