//! # Códigos de Estado HTTP
//!
//! Tabla fija de códigos de estado que conoce el servidor. Solo tres
//! códigos tienen reason phrase propia:
//!
//! - **200** OK
//! - **404** Not Found
//! - **501** Not Implemented
//!
//! Cualquier otro código se serializa con "Unknown Status Code".

/// Reason phrase para códigos que no están en la tabla
pub const UNKNOWN_REASON: &str = "Unknown Status Code";

/// Código de estado HTTP
///
/// Es un newtype sobre `u16` para poder representar también códigos
/// fuera de la tabla (ej: 301), que igual deben poder serializarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 200 OK - La petición fue exitosa
    pub const OK: StatusCode = StatusCode(200);

    /// 404 Not Found - Archivo no encontrado
    pub const NOT_FOUND: StatusCode = StatusCode(404);

    /// 501 Not Implemented - Método sin handler
    pub const NOT_IMPLEMENTED: StatusCode = StatusCode(501);

    /// Crea un código a partir de su valor numérico
    pub const fn from_u16(code: u16) -> Self {
        StatusCode(code)
    }

    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use noob_server::http::StatusCode;
    /// assert_eq!(StatusCode::OK.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Retorna el reason phrase asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use noob_server::http::StatusCode;
    /// assert_eq!(StatusCode::NOT_FOUND.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::from_u16(301).reason_phrase(), "Unknown Status Code");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        reason_phrase(self.0)
    }
}

/// Busca el reason phrase de un código numérico en la tabla
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        404 => "Not Found",
        501 => "Not Implemented",
        _ => UNKNOWN_REASON,
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::OK.as_u16(), 200);
        assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
        assert_eq!(StatusCode::NOT_IMPLEMENTED.as_u16(), 501);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(StatusCode::OK.reason_phrase(), "OK");
        assert_eq!(StatusCode::NOT_FOUND.reason_phrase(), "Not Found");
        assert_eq!(StatusCode::NOT_IMPLEMENTED.reason_phrase(), "Not Implemented");
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(reason_phrase(301), UNKNOWN_REASON);
        assert_eq!(reason_phrase(500), UNKNOWN_REASON);
        assert_eq!(StatusCode::from(418).reason_phrase(), "Unknown Status Code");
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::OK.to_string(), "200 OK");
        assert_eq!(StatusCode::NOT_FOUND.to_string(), "404 Not Found");
        assert_eq!(StatusCode::from_u16(301).to_string(), "301 Unknown Status Code");
    }
}
