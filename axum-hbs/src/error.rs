//! Crate-wide error type.
use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("template \"{0}\" does not exist")]
    TemplateDoesNotExist(PathBuf),

    #[error("layout \"{0}\" is not in the layouts directory")]
    LayoutNotFound(String),

    #[error("no layout requested and no default layout configured")]
    NoLayout,

    #[error("view name is not set on the response")]
    MissingViewName,
}

/// Renderer failures become 500-class responses, matching what
/// the framework does with any other failed handler.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "500 - Internal Server Error").into_response()
    }
}
