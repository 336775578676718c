use std::net::Ipv4Addr;

use tracing::info;

use tickoff::{config::Config, create_app, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::default();
    let state = AppState::new(&config);
    let app = create_app(state);
    let addr = (Ipv4Addr::UNSPECIFIED, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    info!(data_file = %config.data_file.display(), "running on http://localhost:{}", config.port);

    axum::serve(listener, app).await.expect("failed serving");
}
