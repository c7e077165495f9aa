//! # Handler GET
//!
//! Sirve archivos estáticos desde el directorio raíz del sitio.
//!
//! `/` (o una URI que queda vacía después de quitar las barras) sirve el
//! documento por defecto. Si el archivo no existe o es un directorio, la
//! respuesta es 404.

use crate::http::mime::{guess_type, DEFAULT_MIME};
use crate::http::{Request, Response, StatusCode};
use crate::router::Site;
use log::{debug, warn};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Body fijo de la respuesta 404
pub const NOT_FOUND_BODY: &str = "<h1>404 Not Found</h1>";

/// Handler para GET /path
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK\r\n
/// Content-Type: text/css\r\n
/// Content-Length: 24\r\n
/// \r\n
/// body { margin: 0; }
/// ```
pub fn get_handler(req: &Request, site: &Site) -> Response {
    // Una request line sin URI se trata como "/"
    let uri = req.uri().unwrap_or("/");

    let path = match resolve_path(site, uri) {
        Some(p) => p,
        None => {
            warn!("URI rechazada: {}", uri);
            return not_found();
        }
    };

    match fs::metadata(&path) {
        Ok(meta) if !meta.is_dir() => {}
        _ => {
            debug!("No existe o es directorio: {}", path.display());
            return not_found();
        }
    }

    let contents = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("No se pudo leer {}: {}", path.display(), e);
            return not_found();
        }
    };

    let content_type = guess_type(&path).unwrap_or(DEFAULT_MIME);

    Response::new(StatusCode::OK)
        .with_header("Content-Type", content_type)
        .with_body_bytes(contents)
}

/// Respuesta 404 con el body HTML fijo
pub fn not_found() -> Response {
    Response::html(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Traduce la URI a una ruta dentro de la raíz del sitio
///
/// Descarta query string y fragmento, quita las barras de los extremos y
/// usa el documento por defecto si no queda nada. Retorna `None` si la
/// ruta intenta salir de la raíz (`..` o rutas absolutas).
pub fn resolve_path(site: &Site, uri: &str) -> Option<PathBuf> {
    let uri = uri.split(['?', '#']).next().unwrap_or("");
    let relative = uri.trim_matches('/');

    let relative = if relative.is_empty() {
        site.default_document()
    } else {
        relative
    };

    let relative = Path::new(relative);
    let inside_root = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !inside_root {
        return None;
    }

    Some(site.doc_root().join(relative))
}
