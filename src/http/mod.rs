//! # Módulo HTTP
//!
//! Este módulo implementa la capa de protocolo HTTP/1.1 desde cero, sin
//! usar librerías de alto nivel. Incluye:
//!
//! - Parsing de requests desde el buffer crudo
//! - Construcción de responses byte a byte
//! - Tabla de status codes
//! - Tabla de tipos MIME para archivos estáticos
//!
//! Lo que no soporta: keep-alive, chunked transfer encoding, compresión.
//! Cada conexión lleva exactamente un request.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Host: localhost:8888\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Server: NoobServer\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <h1>Hola</h1>
//! ```

pub mod mime;      // Extensión → Content-Type
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
