// src/routes/mod.rs
pub mod chat;
pub mod pages;

use crate::{
    message::{ChatReply, ChatRequest},
    state::SharedState,
};
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use pages::{favicon_handler, health_handler, index_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "HotMessCoach"),
    paths(
        chat::chat_handler,
        pages::index_handler,
        pages::favicon_handler,
        pages::health_handler,
    ),
    components(schemas(ChatRequest, ChatReply))
)]
pub struct ApiDoc;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
