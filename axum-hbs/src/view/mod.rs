//! Views, the **V** in MVC.
//!
//! A [`View`] decorates an HTTP response with the name of a template to
//! render and the data to render it with. Template compilation is
//! delegated entirely to the [`Engine`]; the view itself only marshals
//! status, headers and the rendered body into a response.
//!
//! # Example
//!
//! ```no_run
//! use axum_hbs::prelude::*;
//!
//! # async fn handler(engine: &Engine) -> Result<axum::response::Response, Error> {
//! view("index", json!({"name": "world"}))?
//!     .render(engine)
//!     .await
//! # }
//! ```
pub mod engine;
pub mod helpers;

pub use engine::Engine;

use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// HTTP response rendered from a named view.
#[derive(Debug, Clone, Default)]
pub struct View {
    name: Option<String>,
    data: Value,
    code: StatusCode,
    headers: HeaderMap,
}

impl View {
    /// Create a view response with status 200 and no data.
    pub fn new(name: impl ToString) -> Self {
        Self::default().set_view(name)
    }

    /// Set the view name.
    pub fn set_view(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// The view name, if one was set.
    pub fn view_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the data the view is rendered with.
    pub fn data(mut self, data: impl Serialize) -> Result<Self, Error> {
        self.data = serde_json::to_value(data)?;
        Ok(self)
    }

    /// Set the response status code.
    pub fn code(mut self, code: StatusCode) -> Self {
        self.code = code;
        self
    }

    /// Set a response header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Select the layout for this response. Stored under the `layout`
    /// key of the render options.
    pub fn layout(mut self, name: impl ToString) -> Self {
        let mut map = match self.data {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        map.insert(
            engine::LAYOUT_KEY.to_string(),
            Value::String(name.to_string()),
        );
        self.data = Value::Object(map);
        self
    }

    /// Render the view through the engine and produce the response,
    /// carrying the configured status code and headers.
    ///
    /// Fails with [`Error::MissingViewName`] if no view name was set,
    /// before any template I/O happens.
    pub async fn render(&self, engine: &Engine) -> Result<Response, Error> {
        let name = self.view_name().ok_or(Error::MissingViewName)?;
        let body = engine.render(name, &self.data).await?;

        Ok((self.code, self.headers.clone(), Html(body)).into_response())
    }
}

/// Create a view response in one call.
///
/// ```no_run
/// use axum_hbs::view;
/// use serde_json::json;
///
/// let response = view("profile", json!({"name": "Alice"})).unwrap();
/// ```
pub fn view(name: impl ToString, data: impl Serialize) -> Result<View, Error> {
    View::new(name).data(data)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::EngineConfig;
    use serde_json::json;

    #[test]
    fn test_fluent_setters() {
        let view = View::new("index")
            .code(StatusCode::CREATED)
            .layout("admin")
            .set_view("dashboard");

        assert_eq!(view.view_name(), Some("dashboard"));
        assert_eq!(view.code, StatusCode::CREATED);
        assert_eq!(view.data["layout"], json!("admin"));
    }

    #[test]
    fn test_view_name_unset() {
        assert_eq!(View::default().view_name(), None);
    }

    #[tokio::test]
    async fn test_missing_view_name() {
        let engine = Engine::new(EngineConfig::new()).unwrap();
        let err = View::default()
            .data(json!({"name": "world"}))
            .unwrap()
            .render(&engine)
            .await
            .err()
            .unwrap();

        assert!(matches!(err, Error::MissingViewName));
    }
}
