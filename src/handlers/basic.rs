//! # Handlers básicos
//!
//! - OPTIONS: anuncia los métodos permitidos
//! - Fallback para métodos sin implementar (501)

use crate::http::{Request, Response, StatusCode};
use crate::router::Site;

/// Métodos que se anuncian en el header `Allow`
pub const ALLOWED_METHODS: &str = "OPTIONS, GET";

/// Body fijo de la respuesta 501
pub const NOT_IMPLEMENTED_BODY: &str = "<h1>501 Not Implemented</h1>";

/// Handler para OPTIONS
///
/// 200 sin body, con `Allow: OPTIONS, GET`.
pub fn options_handler(_req: &Request, _site: &Site) -> Response {
    Response::new(StatusCode::OK).with_header("Allow", ALLOWED_METHODS)
}

/// Handler para cualquier método que no tenga handler propio
pub fn not_implemented_handler(_req: &Request, _site: &Site) -> Response {
    Response::html(StatusCode::NOT_IMPLEMENTED, NOT_IMPLEMENTED_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options() {
        let request = Request::parse(b"OPTIONS / HTTP/1.1\r\n\r\n").unwrap();
        let response = options_handler(&request, &Site::default());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.header("Allow"), Some("OPTIONS, GET"));
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_not_implemented() {
        let request = Request::parse(b"DELETE /x HTTP/1.1\r\n\r\n").unwrap();
        let response = not_implemented_handler(&request, &Site::default());

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(response.body(), NOT_IMPLEMENTED_BODY.as_bytes());
        assert_eq!(response.header("Content-Type"), Some("text/html"));
    }
}
