//! # Construcción de Respuestas HTTP
//!
//! Primitivas puras para armar una respuesta HTTP/1.1 byte a byte, más un
//! builder (`Response`) que las compone.
//!
//! ## Formato de una respuesta HTTP/1.1
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Server: NoobServer\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <h1>Hola</h1>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use noob_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::OK)
//!     .with_header("Content-Type", "application/json")
//!     .with_body(r#"{"message": "Hello"}"#);
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use super::StatusCode;
use std::collections::HashMap;

/// Terminador de línea del protocolo
pub const CRLF: &[u8] = b"\r\n";

/// Headers que lleva toda respuesta salvo que se sobrescriban
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("Server", "NoobServer"),
    ("Content-Type", "text/html"),
];

/// Construye la status line: `HTTP/1.1 {code} {reason}\r\n`
///
/// # Ejemplo
/// ```
/// use noob_server::http::response::status_line;
///
/// assert_eq!(status_line(404), b"HTTP/1.1 404 Not Found\r\n".to_vec());
/// ```
pub fn status_line(code: u16) -> Vec<u8> {
    format!("HTTP/1.1 {}\r\n", StatusCode::from_u16(code)).into_bytes()
}

/// Mezcla los headers por defecto con `extra`
///
/// Los valores de `extra` ganan en caso de colisión. Nunca modifica
/// `DEFAULT_HEADERS`, siempre retorna un mapa nuevo.
pub fn merged_headers(extra: Option<&HashMap<String, String>>) -> HashMap<String, String> {
    let mut headers: HashMap<String, String> = DEFAULT_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    if let Some(extra) = extra {
        for (name, value) in extra {
            headers.insert(name.clone(), value.clone());
        }
    }

    headers
}

/// Serializa los headers (defaults + `extra`) como `Name: Value\r\n`
///
/// El orden de las líneas no está garantizado.
pub fn header_block(extra: Option<&HashMap<String, String>>) -> Vec<u8> {
    let mut block = Vec::new();

    for (name, value) in merged_headers(extra) {
        block.extend_from_slice(format!("{}: {}", name, value).as_bytes());
        block.extend_from_slice(CRLF);
    }

    block
}

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers propios de esta respuesta, se mezclan con `DEFAULT_HEADERS`
    /// al serializar
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers propios ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para archivos binarios (imágenes, pdf, etc.)
    ///
    /// # Ejemplo
    /// ```
    /// use noob_server::http::{Response, StatusCode};
    ///
    /// let binary_data = vec![0x89, 0x50, 0x4E, 0x47]; // PNG header
    /// let response = Response::new(StatusCode::OK)
    ///     .with_body_bytes(binary_data);
    /// assert_eq!(response.header("Content-Length"), Some("4"));
    /// ```
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self.headers.insert(
            "Content-Length".to_string(),
            self.body.len().to_string()
        );
        self
    }

    /// Crea una respuesta HTML con el código indicado
    ///
    /// `Content-Type` queda en `text/html` por los headers por defecto.
    pub fn html(status: StatusCode, body: &str) -> Self {
        Self::new(status).with_body(body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// status line + bloque de headers + `\r\n` + body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = status_line(self.status.as_u16());
        result.extend_from_slice(&header_block(Some(&self.headers)));
        result.extend_from_slice(CRLF);
        result.extend_from_slice(&self.body);
        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Valor efectivo de un header, considerando los defaults
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .map(|s| s.as_str())
            .or_else(|| {
                DEFAULT_HEADERS
                    .iter()
                    .find(|(default_name, _)| *default_name == name)
                    .map(|(_, value)| *value)
            })
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
