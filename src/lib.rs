//! Documentation of a Redis-backed echo message board.
//!
//! # General Infrastructure
//! - One page, served by this backend directly
//! - `GET /` renders the board, `POST /` appends a message then renders
//! - Messages live in Redis under `message{n}` keys, `n` handed out by an atomic counter
//! - Redis is reached over TLS with the password supplied through the environment
//!
//! # Notes
//!
//! ## Redis
//! We only need four operations: `INCR` for ids, `SET`/`GET` for message
//! bodies, and `KEYS` to enumerate the board. Redis gives us the atomic
//! counter for free, which is the only concurrency-sensitive piece of the
//! whole app. Everything else is plain request/response.
//!
//! The `KEYS`-then-`GET` listing is not atomic. A message appended while
//! a request is mid-scan may be missing from that response. Eventual
//! consistency is acceptable for a guestbook.
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod order;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;

use routes::{index_handler, submit_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
