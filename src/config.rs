//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables
//! de entorno. Todos los valores tienen default, así que el servidor puede
//! arrancar sin argumentos en `127.0.0.1:8888`.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./noob_server --port 8080 --root ./public --index home.html
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=0.0.0.0 ./noob_server
//! ```

use crate::error::{Result, ServerError};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "noob_server")]
#[command(about = "Servidor HTTP/1.1 minimo sobre sockets TCP crudos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8888", env = "HTTP_PORT")]
    pub port: u16,

    /// Directorio desde donde se sirven los archivos del GET
    #[arg(long = "root", default_value = ".", env = "HTTP_ROOT")]
    pub doc_root: PathBuf,

    /// Documento que se sirve para "/"
    #[arg(long = "index", default_value = "index.html", env = "HTTP_INDEX")]
    pub default_document: String,

    /// Máximo de bytes que se leen por conexión (una sola lectura)
    #[arg(long = "buffer-size", default_value = "1024", env = "HTTP_BUFFER_SIZE")]
    pub buffer_size: usize,

    /// Conexiones pendientes que encola el socket de escucha
    #[arg(long, default_value = "5", env = "HTTP_BACKLOG")]
    pub backlog: i32,

    /// Atender cada conexión en su propio thread
    #[arg(long, default_value_t = false, env = "HTTP_THREADED")]
    pub threaded: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use noob_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8888");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(ServerError::InvalidConfig(
                "Buffer size must be >= 1".to_string(),
            ));
        }
        if self.backlog <= 0 {
            return Err(ServerError::InvalidConfig(
                "Backlog must be >= 1".to_string(),
            ));
        }
        if self.default_document.is_empty() {
            return Err(ServerError::InvalidConfig(
                "Index document must not be empty".to_string(),
            ));
        }
        if self.default_document.contains('/') {
            return Err(ServerError::InvalidConfig(
                "Index document must be a file name, not a path".to_string(),
            ));
        }

        Ok(())
    }

    /// Loguea un resumen de la configuración
    pub fn print_summary(&self) {
        info!("Configuración:");
        info!("   Address:      {}", self.address());
        info!("   Doc root:     {}", self.doc_root.display());
        info!("   Index:        {}", self.default_document);
        info!("   Buffer:       {} bytes", self.buffer_size);
        info!("   Backlog:      {}", self.backlog);
        info!(
            "   Modo:         {}",
            if self.threaded { "un thread por conexión" } else { "secuencial" }
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
            doc_root: PathBuf::from("."),
            default_document: "index.html".to_string(),
            buffer_size: 1024,
            backlog: 5,
            threaded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8888);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.buffer_size, 1024);
        assert_eq!(config.backlog, 5);
        assert_eq!(config.default_document, "index.html");
        assert!(!config.threaded);
    }

    #[test]
    fn test_defaults_match_cli() {
        let parsed = Config::try_parse_from(["noob_server"]).unwrap();
        let default = Config::default();

        assert_eq!(parsed.address(), default.address());
        assert_eq!(parsed.doc_root, default.doc_root);
        assert_eq!(parsed.default_document, default.default_document);
        assert_eq!(parsed.buffer_size, default.buffer_size);
        assert_eq!(parsed.backlog, default.backlog);
    }

    #[test]
    fn test_cli_arguments() {
        let config = Config::try_parse_from([
            "noob_server",
            "--port",
            "3000",
            "--root",
            "/srv/www",
            "--index",
            "home.html",
            "--threaded",
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.doc_root, PathBuf::from("/srv/www"));
        assert_eq!(config.default_document, "home.html");
        assert!(config.threaded);
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_buffer_size() {
        let mut config = Config::default();
        config.buffer_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Buffer size"));
    }

    #[test]
    fn test_validate_invalid_backlog() {
        let mut config = Config::default();
        config.backlog = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Backlog"));
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut config = Config::default();
        config.default_document = String::new();
        assert!(config.validate().is_err());

        config.default_document = "docs/index.html".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("file name"));
    }

    #[test]
    fn test_config_print_summary() {
        // No debe hacer panic
        Config::default().print_summary();
    }
}
