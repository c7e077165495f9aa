//! # Noob Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Sin argumentos escucha en
//! `127.0.0.1:8888` y sirve archivos del directorio actual.

use log::{error, info};
use noob_server::config::Config;
use noob_server::server;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("=================================");
    info!("  Noob HTTP/1.1 Server");
    info!("=================================");

    // Crear configuración (CLI o env)
    let config = Config::new();
    config.print_summary();

    let server = match server::http_server(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("Error al iniciar servidor: {}", e);
            std::process::exit(1);
        }
    };

    // Esto bloquea el thread principal
    if let Err(e) = server.run() {
        error!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
