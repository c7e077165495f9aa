//! # Noob Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado directamente sobre sockets TCP,
//! sin librerías HTTP. Muestra cómo se parsea un request a nivel de bytes y
//! cómo se arma la respuesta que viaja por el cable.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `server`: Loop de aceptación TCP y la capa HTTP que se le inyecta
//! - `http`: Parsing de requests, construcción de responses, status codes
//! - `router`: Despacho por método (OPTIONS, GET, POST, 501)
//! - `handlers`: Implementación de cada método
//! - `config`: Argumentos CLI y variables de entorno
//! - `error`: Errores del crate
//!
//! Cada conexión lleva exactamente un request: se lee un buffer, se
//! responde y se cierra.
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use noob_server::config::Config;
//! use noob_server::server;
//!
//! let config = Config::default();
//! let server = server::http_server(&config).expect("Error al iniciar servidor");
//! server.run().expect("Error fatal");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;

pub use error::{Result, ServerError};
