//! # Tipos MIME
//!
//! Tabla fija extensión → Content-Type usada por el handler GET.

use std::path::Path;

/// Content-Type que se usa cuando la extensión no está en la tabla
pub const DEFAULT_MIME: &str = "text/html";

/// Adivina el Content-Type de un archivo según su extensión
///
/// La extensión se compara sin distinguir mayúsculas. Retorna `None` si el
/// archivo no tiene extensión o no está en la tabla.
///
/// # Ejemplo
/// ```
/// use noob_server::http::mime::guess_type;
/// use std::path::Path;
///
/// assert_eq!(guess_type(Path::new("index.html")), Some("text/html"));
/// assert_eq!(guess_type(Path::new("LOGO.PNG")), Some("image/png"));
/// assert_eq!(guess_type(Path::new("Makefile")), None);
/// ```
pub fn guess_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();

    let mime = match extension.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "xml" => "text/xml",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "wasm" => "application/wasm",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "mp4" => "video/mp4",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => return None,
    };

    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(guess_type(Path::new("a/b/page.htm")), Some("text/html"));
        assert_eq!(guess_type(Path::new("style.css")), Some("text/css"));
        assert_eq!(guess_type(Path::new("data.json")), Some("application/json"));
        assert_eq!(guess_type(Path::new("photo.JPEG")), Some("image/jpeg"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(guess_type(Path::new("archive.xyz")), None);
        assert_eq!(guess_type(Path::new("README")), None);
        assert_eq!(guess_type(Path::new(".hidden")), None);
    }
}
