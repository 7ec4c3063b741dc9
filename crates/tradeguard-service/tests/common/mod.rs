use chrono::Utc;
use std::sync::Arc;
use tokio::net::TcpListener;
use tradeguard_service::api::{create_router, AppState};
use tradeguard_service::storage::InMemoryStorage;

/// Boot the service on an ephemeral port and return its base URL.
pub async fn spawn_app() -> String {
    let storage = Arc::new(InMemoryStorage::seeded(Utc::now()));
    let state = AppState::new(storage);
    let app = create_router(state, true);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    format!("http://{addr}")
}
