//! # Handler HTTP
//! src/server/http.rs
//!
//! Implementación de `ConnectionHandler` para HTTP: parsea el buffer,
//! despacha por método y serializa la respuesta.

use super::tcp::ConnectionHandler;
use crate::error::Result;
use crate::http::Request;
use crate::router::Router;

/// Capa HTTP sobre el servidor TCP
#[derive(Debug, Clone, Default)]
pub struct HttpHandler {
    router: Router,
}

impl HttpHandler {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

impl ConnectionHandler for HttpHandler {
    /// Un request malformado se propaga como error: no hay respuesta
    fn handle(&self, data: &[u8]) -> Result<Vec<u8>> {
        let request = Request::parse(data)?;
        let response = self.router.dispatch(&request);
        Ok(response.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerError;

    #[test]
    fn test_handle_options() {
        let bytes = HttpHandler::default()
            .handle(b"OPTIONS / HTTP/1.1\r\n\r\n")
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Allow: OPTIONS, GET\r\n"));
        assert!(text.contains("Server: NoobServer\r\n"));
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_handle_unknown_method() {
        let bytes = HttpHandler::default().handle(b"PUT /x HTTP/1.1\r\n\r\n").unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 501 Not Implemented\r\n"));
    }

    #[test]
    fn test_handle_malformed() {
        let result = HttpHandler::default().handle(b"GET / HTTP/1.1\r\nbroken\r\n\r\n");
        assert!(matches!(result, Err(ServerError::Parse(_))));
    }
}
