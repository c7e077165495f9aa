//! # Despacho por método
//! src/router/mod.rs
//!
//! Este módulo mapea el método del request a su handler.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Method → Handler → Response
//! ```
//!
//! El método se compara de forma exacta (sensible a mayúsculas) contra los
//! métodos soportados. Todo lo demás, incluidos métodos HTTP válidos como
//! PUT o DELETE, cae en el handler 501.

use crate::config::Config;
use crate::handlers;
use crate::http::{Request, Response};
use log::info;
use std::path::{Path, PathBuf};

/// Tipo de función handler
///
/// Un handler recibe el Request y la configuración del sitio y retorna
/// una Response
pub type Handler = fn(&Request, &Site) -> Response;

/// Métodos HTTP con handler propio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// OPTIONS - Consultar los métodos permitidos
    Options,

    /// GET - Obtener un archivo
    Get,

    /// POST - Enviar datos (JSON o formulario)
    Post,
}

impl Method {
    /// Parsea un método desde el token de la request line
    ///
    /// Retorna `None` si el método no tiene handler.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "OPTIONS" => Some(Method::Options),
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            _ => None,
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Options => "OPTIONS",
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Handler asociado al método
    pub fn handler(&self) -> Handler {
        match self {
            Method::Options => handlers::options_handler,
            Method::Get => handlers::get_handler,
            Method::Post => handlers::post_handler,
        }
    }
}

/// Configuración de los archivos que sirve el GET
#[derive(Debug, Clone)]
pub struct Site {
    doc_root: PathBuf,
    default_document: String,
}

impl Site {
    pub fn new(doc_root: impl Into<PathBuf>, default_document: &str) -> Self {
        Self {
            doc_root: doc_root.into(),
            default_document: default_document.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.doc_root.clone(), &config.default_document)
    }

    /// Directorio raíz desde donde se sirven archivos
    pub fn doc_root(&self) -> &Path {
        &self.doc_root
    }

    /// Documento que se sirve para "/"
    pub fn default_document(&self) -> &str {
        &self.default_document
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(".", "index.html")
    }
}

/// Router sin estado entre requests
#[derive(Debug, Clone, Default)]
pub struct Router {
    site: Site,
}

impl Router {
    /// Crea un router que sirve archivos según `site`
    pub fn new(site: Site) -> Self {
        Self { site }
    }

    /// Selecciona el handler para un método
    ///
    /// Los métodos sin handler caen en `not_implemented_handler`.
    pub fn handler_for(method: &str) -> Handler {
        match Method::from_token(method) {
            Some(method) => method.handler(),
            None => handlers::not_implemented_handler,
        }
    }

    /// Ejecuta el handler apropiado para un request
    ///
    /// # Ejemplo
    /// ```
    /// use noob_server::router::Router;
    /// use noob_server::http::{Request, StatusCode};
    ///
    /// let router = Router::default();
    /// let request = Request::parse(b"PUT /x HTTP/1.1\r\n\r\n").unwrap();
    /// let response = router.dispatch(&request);
    ///
    /// assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    /// ```
    pub fn dispatch(&self, request: &Request) -> Response {
        let handler = Self::handler_for(request.method());
        let response = handler(request, &self.site);

        info!(
            "{} {} → {}",
            request.method(),
            request.uri().unwrap_or("-"),
            response.status()
        );

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    fn dispatch(raw: &[u8]) -> Response {
        let request = Request::parse(raw).unwrap();
        Router::default().dispatch(&request)
    }

    #[test]
    fn test_method_from_token() {
        assert_eq!(Method::from_token("GET"), Some(Method::Get));
        assert_eq!(Method::from_token("POST"), Some(Method::Post));
        assert_eq!(Method::from_token("OPTIONS"), Some(Method::Options));
        assert_eq!(Method::from_token("get"), None);
        assert_eq!(Method::from_token("PUT"), None);
        assert_eq!(Method::from_token(""), None);
    }

    #[test]
    fn test_method_as_str_roundtrip() {
        for method in [Method::Options, Method::Get, Method::Post] {
            assert_eq!(Method::from_token(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_supported_methods_never_fall_back() {
        for token in ["OPTIONS", "GET", "POST"] {
            assert!(Method::from_token(token).is_some(), "method {}", token);

            let raw = format!("{} / HTTP/1.1\r\n\r\nname=value", token);
            let response = dispatch(raw.as_bytes());

            assert_ne!(response.status(), StatusCode::NOT_IMPLEMENTED, "method {}", token);
            assert_ne!(
                response.body(),
                handlers::NOT_IMPLEMENTED_BODY.as_bytes(),
                "method {}",
                token
            );
        }
    }

    #[test]
    fn test_unsupported_methods_get_501() {
        for method in ["PUT", "DELETE", "PATCH", "HEAD", "TRACE", "get", "Post", "FOO"] {
            let raw = format!("{} / HTTP/1.1\r\n\r\n", method);
            let response = dispatch(raw.as_bytes());

            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED, "method {}", method);
            let text = String::from_utf8(response.to_bytes()).unwrap();
            assert!(text.starts_with("HTTP/1.1 501 Not Implemented\r\n"));
            assert!(text.ends_with("<h1>501 Not Implemented</h1>"));
        }
    }

    #[test]
    fn test_options_dispatch() {
        let response = dispatch(b"OPTIONS * HTTP/1.1\r\n\r\n");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.header("Allow"), Some("OPTIONS, GET"));
    }

    #[test]
    fn test_post_dispatch() {
        let response = dispatch(b"POST / HTTP/1.1\r\n\r\nname=value");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.header("Content-Type"), Some("text/html"));
    }

    #[test]
    fn test_get_dispatch_missing_file() {
        let router = Router::new(Site::new(std::env::temp_dir(), "index.html"));
        let request = Request::parse(b"GET /noob_server_definitely_missing.html HTTP/1.1\r\n\r\n").unwrap();
        let response = router.dispatch(&request);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
