//! greeting-service: a single-endpoint HTTP service that answers `GET /`
//! with a fixed greeting plus the date and time the request was served.

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod dtos;
pub mod handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "greeting-service", description = "greeting-service API"),
    paths(handlers::hello),
    components(schemas(dtos::Message))
)]
pub struct ApiDoc;

/// Assembles the application router: the greeting route, the OpenAPI
/// document, the Swagger UI, and a permissive CORS layer.
pub fn build_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi);

    Router::new()
        .route("/", get(handlers::hello))
        .merge(swagger_ui)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Starts the web server.
pub async fn run_server() -> anyhow::Result<()> {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let address = format!("{}:{}", host, port);

    println!("🚀 Server running at http://{}", address);
    println!("📚 Swagger UI available at http://{}/swagger-ui", address);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("bind {}", address))?;
    axum::serve(listener, build_router())
        .await
        .context("server shutdown")?;

    Ok(())
}
