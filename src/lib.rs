pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod store;

use std::{path::PathBuf, sync::Arc};

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use config::Config;
use store::TodoStore;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub public_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: Arc::new(TodoStore::new(config.data_file.clone())),
            public_dir: Arc::new(config.public_dir.clone()),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let assets = ServeDir::new(&*state.public_dir);

    Router::new()
        .route("/api/todos", get(handlers::api::list_all_todos))
        .route("/api/todos", post(handlers::api::create_new_todo))
        .route("/api/todos/{id}", put(handlers::api::update_existing_todo))
        .route(
            "/api/todos/{id}",
            delete(handlers::api::delete_existing_todo),
        )
        .fallback_service(assets)
        .layer(
            tower::ServiceBuilder::new()
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower_http::compression::CompressionLayer::new()),
        )
        .with_state(state)
}
