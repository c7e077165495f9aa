//! # Handler POST
//!
//! Intenta interpretar el body como JSON. Si lo logra responde con un
//! documento JSON que describe lo recibido; si no, trata el body como texto
//! de formulario y lo devuelve dentro de un HTML.
//!
//! En ambos casos el status es 200: un JSON inválido no es un error del
//! cliente.

use crate::http::{Request, Response, StatusCode};
use crate::router::Site;
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Descripción de un body JSON recibido
#[derive(Debug, Serialize)]
struct JsonReceipt<'a> {
    message: &'static str,
    data: &'a Value,
}

/// Handler para POST
///
/// # Ejemplo de response (body JSON)
/// ```json
/// {"message":"Received JSON data","data":{"a":1}}
/// ```
///
/// # Ejemplo de response (body de formulario)
/// ```html
/// <h1>Received form data</h1><p>name=value</p>
/// ```
pub fn post_handler(req: &Request, _site: &Site) -> Response {
    let text = String::from_utf8_lossy(req.body());

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => {
            debug!("POST con JSON válido");
            json_response(&value)
        }
        Err(e) => {
            debug!("POST sin JSON ({}), se trata como formulario", e);
            form_response(&text)
        }
    }
}

fn json_response(value: &Value) -> Response {
    let receipt = JsonReceipt {
        message: "Received JSON data",
        data: value,
    };
    let body = serde_json::to_string(&receipt)
        .unwrap_or_else(|_| value.to_string());

    Response::new(StatusCode::OK)
        .with_header("Content-Type", "application/json")
        .with_body(&body)
}

fn form_response(text: &str) -> Response {
    // El texto se devuelve literal, sin escapar HTML
    let body = format!("<h1>Received form data</h1><p>{}</p>", text);

    Response::new(StatusCode::OK)
        .with_header("Content-Type", "text/html")
        .with_body(&body)
}
