//! Main entry point for the maze-chase backend.
//!
//! Initializes logging and launches the HTTP server with the game WebSocket endpoint.
//! Each connection gets its own game session actor.

use actix_web::{App, HttpServer};
use log::info;

use crate::config::server::{BIND_HOST, BIND_PORT};

mod config;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from RUST_LOG (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("[Main] Listening on {}:{}", BIND_HOST, BIND_PORT);

    HttpServer::new(|| {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
