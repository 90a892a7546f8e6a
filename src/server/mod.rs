//! Preview server for the generated pages

use anyhow::Result;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::commands;
use crate::Folio;

/// Start serving `public_dir`, optionally regenerating on content changes
pub async fn start(folio: &Folio, ip: &str, port: u16, watch: bool) -> Result<()> {
    let app = router(folio);
    let addr = bind_addr(ip, port)?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let folio = folio.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = commands::generate::watch(&folio) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(folio: &Folio) -> Router {
    let files = ServeDir::new(&folio.public_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/__health", get(health))
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })),
    )
}

/// Parse the listen address; `localhost` binds the IPv4 loopback
fn bind_addr(ip: &str, port: u16) -> Result<SocketAddr> {
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    Ok(format!("{}:{}", bind_ip, port).parse()?)
}
