//! # Handlers por método
//!
//! Cada handler recibe el `Request` ya parseado y la configuración del
//! sitio, y retorna una `Response`.
//!
//! - **basic**: OPTIONS y el fallback 501
//! - **files**: GET de archivos estáticos
//! - **form**: POST con body JSON o de formulario

pub mod basic;
pub mod files;
pub mod form;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;
pub use form::*;
