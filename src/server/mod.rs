//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Dos capas compuestas:
//! 1. `tcp`: escucha en un puerto, acepta conexiones, lee un buffer y
//!    escribe la respuesta. Es genérico sobre un `ConnectionHandler`.
//! 2. `http`: el `ConnectionHandler` que entiende HTTP.

pub mod http;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use http::HttpHandler;
pub use tcp::{ConnectionHandler, EchoHandler, TcpServer};

use crate::config::Config;
use crate::error::Result;
use crate::router::{Router, Site};

/// Servidor HTTP completo
pub type Server = TcpServer<HttpHandler>;

/// Crea el servidor HTTP a partir de la configuración
pub fn http_server(config: &Config) -> Result<Server> {
    let router = Router::new(Site::from_config(config));
    TcpServer::bind(config, HttpHandler::new(router))
}
