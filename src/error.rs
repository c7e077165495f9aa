//! # Errores del servidor
//! src/error.rs

use crate::http::ParseError;
use thiserror::Error;

/// Errores que puede producir el servidor
///
/// Ninguno se convierte en respuesta HTTP: cuando aparecen, la conexión
/// afectada se cierra sin responder.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Error de socket (bind, accept, read, write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request malformado
    #[error("Malformed request: {0}")]
    Parse(#[from] ParseError),

    /// Configuración inválida
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Alias de `Result` para el crate
pub type Result<T> = std::result::Result<T, ServerError>;
