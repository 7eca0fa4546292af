use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::routing::get;
use axum::{Extension, Router};
use serde_json::json;
use tempdir::TempDir;
use tower::util::ServiceExt;

use axum_hbs::{mount, view, EngineConfig, Error, SharedEngine};

fn write_file(path: &Path, contents: &str) {
    let mut file = File::create(path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}

async fn index(
    Extension(engine): Extension<SharedEngine>,
) -> Result<axum::response::Response, Error> {
    view("index", json!({"name": "world"}))?.render(&engine).await
}

async fn created(
    Extension(engine): Extension<SharedEngine>,
) -> Result<axum::response::Response, Error> {
    view("index", json!({"name": "world"}))?
        .code(StatusCode::CREATED)
        .header(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
        .render(&engine)
        .await
}

async fn broken(
    Extension(engine): Extension<SharedEngine>,
) -> Result<axum::response::Response, Error> {
    view("missing", json!({}))?.render(&engine).await
}

// One test owns the process working directory: `mount` serves
// statics out of `public/` and views out of `views/` relative to it.
#[tokio::test]
async fn test_mount() {
    let root = TempDir::new("app").unwrap();

    create_dir_all(root.path().join("public")).unwrap();
    create_dir_all(root.path().join("views/layouts")).unwrap();

    write_file(
        &root.path().join("views/layouts/main.hbs"),
        "<main>{{{body}}}</main>",
    );
    write_file(&root.path().join("views/index.hbs"), "hello {{name}}");
    write_file(&root.path().join("public/style.css"), "body { color: red }");

    std::env::set_current_dir(root.path()).unwrap();

    let app = Router::new()
        .route("/", get(index))
        .route("/created", get(created))
        .route("/broken", get(broken));

    let app = mount(
        app,
        EngineConfig::new()
            .layouts_dir(root.path().join("views/layouts"))
            .default_layout("main"),
    )
    .unwrap();

    // Rendered view inside its layout.
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<main>hello world</main>");

    // Status code and headers set on the view survive the render.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/created")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    // Renderer errors surface as 500s.
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/broken").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Static files served under /public.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/public/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"body { color: red }");
}
