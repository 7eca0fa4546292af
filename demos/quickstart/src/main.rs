use axum::response::Response;
use axum::routing::get;
use axum::Router;
use axum_hbs::prelude::*;

async fn index(Extension(engine): Extension<SharedEngine>) -> Result<Response, Error> {
    view("index", json!({"title": "Quickstart", "name": "world"}))?
        .render(&engine)
        .await
}

async fn about(Extension(engine): Extension<SharedEngine>) -> Result<Response, Error> {
    view("about", json!({"title": "About", "visitors": 3}))?
        .layout("plain")
        .render(&engine)
        .await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::init();

    let app = Router::new()
        .route("/", get(index))
        .route("/about", get(about));

    let app = mount(
        app,
        EngineConfig::new()
            .layouts_dir("views/layouts")
            .partials_dir("views/partials")
            .default_layout("main"),
    )?;

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
    axum::serve(listener, app).await?;

    Ok(())
}
