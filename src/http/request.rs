//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP desde cero, sobre el buffer crudo
//! que se leyó del socket.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /form HTTP/1.1\r\n
//! Host: localhost:8888\r\n
//! Content-Type: application/json\r\n
//! \r\n
//! {"a": 1}
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /uri VERSION` (URI y versión son opcionales)
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: Todo lo que viene después de `\r\n\r\n`

use std::collections::HashMap;
use thiserror::Error;

/// Versión que se asume cuando la request line no trae una
pub const DEFAULT_VERSION: &str = "1.1";

const LINE_SEPARATOR: &[u8] = b"\r\n";
const HEAD_SEPARATOR: &[u8] = b"\r\n\r\n";

/// Errores fatales de parsing
///
/// El servidor no responde nada cuando ocurre alguno de estos: la conexión
/// simplemente se cierra.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// La request line no trae ni siquiera el método
    #[error("Empty request line")]
    EmptyRequestLine,

    /// La request line o algún header no es UTF-8 válido
    #[error("Request head is not valid UTF-8")]
    InvalidEncoding,

    /// Header sin separador ':'
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// Representa un request HTTP parseado
///
/// Se construye una vez por conexión y no se modifica después.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método tal cual llegó (ej: "GET", "PUT", "get")
    method: String,

    /// URI de la petición (ej: "/index.html"); `None` si la request line
    /// solo traía el método
    uri: Option<String>,

    /// Versión HTTP (ej: "HTTP/1.1"); `DEFAULT_VERSION` si no venía
    version: String,

    /// Headers HTTP, con los nombres tal cual llegaron
    headers: HashMap<String, String>,

    /// Bytes crudos después del separador `\r\n\r\n`
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request desde el buffer leído del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use noob_server::http::Request;
    ///
    /// let raw = b"GET /x HTTP/1.1\r\nHost: h\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.uri(), Some("/x"));
    /// assert_eq!(request.header("Host"), Some("h"));
    /// assert!(request.body().is_empty());
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let lines = split_lines(buffer);

        // 1. Request line (primera línea)
        let (method, uri, version) = Self::parse_request_line(lines[0])?;

        // 2. Headers (hasta la primera línea vacía)
        let headers = Self::parse_headers(&lines[1..])?;

        // 3. Body
        let body = Self::parse_body(buffer);

        Ok(Request {
            method,
            uri,
            version,
            headers,
            body,
        })
    }

    /// Parsea la request line
    ///
    /// Se separa por espacios simples y se toman a lo sumo 3 tokens:
    /// método, URI y versión.
    fn parse_request_line(line: &[u8]) -> Result<(String, Option<String>, String), ParseError> {
        let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;
        let mut words = line.split(' ');

        let method = match words.next() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => return Err(ParseError::EmptyRequestLine),
        };
        let uri = words.next().map(str::to_string);
        let version = words
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Ok((method, uri, version))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header se separa en el primer ':'; nombre y valor se recortan.
    fn parse_headers(lines: &[&[u8]]) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;
            match line.split_once(':') {
                Some((name, value)) => {
                    headers.insert(name.trim().to_string(), value.trim().to_string());
                }
                None => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    /// Todo lo que sigue al primer `\r\n\r\n`; vacío si no hay separador
    fn parse_body(buffer: &[u8]) -> Vec<u8> {
        find(buffer, HEAD_SEPARATOR)
            .map(|pos| buffer[pos + HEAD_SEPARATOR.len()..].to_vec())
            .unwrap_or_default()
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene la URI del request, si venía
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (sensible a mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Separa el buffer en líneas por `\r\n`
///
/// Siempre retorna al menos una línea (posiblemente vacía).
fn split_lines(buffer: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut rest = buffer;

    while let Some(pos) = find(rest, LINE_SEPARATOR) {
        lines.push(&rest[..pos]);
        rest = &rest[pos + LINE_SEPARATOR.len()..];
    }
    lines.push(rest);

    lines
}

/// Posición de la primera aparición de `needle` en `haystack`
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
