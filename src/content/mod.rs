//! # Contenido Estático
//! src/content/mod.rs
//!
//! Handler de GET sobre el directorio de contenido: resuelve el path
//! relativo, deduce el Content-Type por extensión y sirve los bytes del
//! archivo. La raíz (`/` o path vacío) siempre redirige a `/index.html`
//! y un archivo inexistente produce un 404 con la página `404.html` del
//! propio directorio de contenido.

use crate::http::response::SERVER;
use crate::http::{Response, StatusCode};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Deduce el Content-Type a partir de la extensión del archivo
///
/// Tabla fija; cualquier extensión desconocida (o ausencia de
/// extensión) se sirve como `application/octet-stream`.
///
/// # Ejemplo
/// ```
/// use servidor_web::content::content_type;
///
/// assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
/// assert_eq!(content_type("datos.bin"), "application/octet-stream");
/// ```
pub fn content_type(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("png") => "image/png",
        Some("ico") => "image/vnd.microsoft.icon",
        _ => "application/octet-stream",
    }
}

/// Construye la respuesta 404 con la página de error del directorio
///
/// Si `404.html` no existe, el error se propaga y la conexión termina
/// sin respuesta (fallo a nivel de conexión, no recuperable aquí).
pub fn not_found_response(content_dir: &str, supports_gzip: bool) -> std::io::Result<Response> {
    let page = fs::read(format!("{}/404.html", content_dir))?;

    let mut response = Response::new(StatusCode::NotFound);
    response.append_header("Server", SERVER);
    response.append_body("text/html; charset=utf-8", &page, supports_gzip)?;

    Ok(response)
}

/// Atiende un GET sobre el directorio de contenido
///
/// - Path vacío (la raíz) → 301 a `/index.html`, exista o no el archivo
/// - Archivo encontrado → 200 con el contenido completo
/// - Archivo inexistente → 404 con la página `404.html`
/// - Cualquier otro error de filesystem se propaga sin respuesta
pub fn handle_get(
    stream: &mut impl Write,
    content_dir: &str,
    path: &str,
    supports_gzip: bool,
) -> std::io::Result<()> {
    if path.is_empty() || path == "/" {
        return Response::redirect("/index.html").send_to(stream);
    }

    match fs::read(format!("{}/{}", content_dir, path)) {
        Ok(bytes) => {
            println!("   [+] returning resource: {}", path);

            let mut response = Response::new(StatusCode::Ok);
            response.append_header("Server", SERVER);
            response.append_body(content_type(path), &bytes, supports_gzip)?;
            response.send_to(stream)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("   [!] client asked for non-existent {}", path);

            not_found_response(content_dir, supports_gzip)?.send_to(stream)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use std::path::PathBuf;

    /// Crea un directorio de contenido temporal con una página 404
    fn temp_content_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "servidor_web_content_{}_{}",
            tag,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("404.html"), "<h1>no existe</h1>").unwrap();
        dir
    }

    #[test]
    fn test_content_type_table() {
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("estilos/main.css"), "text/css");
        assert_eq!(content_type("js/script.js"), "text/javascript");
        assert_eq!(content_type("img/logo.png"), "image/png");
        assert_eq!(content_type("favicon.ico"), "image/vnd.microsoft.icon");
    }

    #[test]
    fn test_content_type_unknown_extension() {
        assert_eq!(content_type("archivo.pdf"), "application/octet-stream");
        assert_eq!(content_type("sin_extension"), "application/octet-stream");
        assert_eq!(content_type(""), "application/octet-stream");
    }

    #[test]
    fn test_root_path_redirects() {
        let dir = temp_content_dir("root");
        let mut sink: Vec<u8> = Vec::new();

        handle_get(&mut sink, dir.to_str().unwrap(), "", false).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("HTTP/1.1 301 Moved Permanently\r\n"));
        assert!(text.contains("Location: /index.html\r\n"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_root_redirects_even_without_index() {
        // La redirección no depende de que index.html exista
        let dir = temp_content_dir("root_no_index");
        assert!(!dir.join("index.html").exists());

        let mut sink: Vec<u8> = Vec::new();
        handle_get(&mut sink, dir.to_str().unwrap(), "", false).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("301 Moved Permanently"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_existing_file_is_served() {
        let dir = temp_content_dir("ok");
        fs::write(dir.join("foo.html"), "<h1>hi</h1>").unwrap();

        let mut sink: Vec<u8> = Vec::new();
        handle_get(&mut sink, dir.to_str().unwrap(), "foo.html", false).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/html; charset=utf-8\r\n"));
        assert!(text.contains("Content-Length: 11\r\n"));
        assert!(text.ends_with("\r\n\r\n<h1>hi</h1>"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_existing_file_gzip() {
        let dir = temp_content_dir("gzip");
        let contenido = "body { color: red; } /* css de prueba para comprimir */";
        fs::write(dir.join("main.css"), contenido).unwrap();

        let mut sink: Vec<u8> = Vec::new();
        handle_get(&mut sink, dir.to_str().unwrap(), "main.css", true).unwrap();

        let text = String::from_utf8_lossy(&sink);
        assert!(text.contains("Content-Encoding: gzip\r\n"));

        // El body gzip debe descomprimir al contenido original
        let body_start = sink.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
        let mut decoder = GzDecoder::new(&sink[body_start..]);
        let mut decompressed = String::new();
        decoder.read_to_string(&mut decompressed).unwrap();
        assert_eq!(decompressed, contenido);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_serves_404_page() {
        let dir = temp_content_dir("miss");

        let mut sink: Vec<u8> = Vec::new();
        handle_get(&mut sink, dir.to_str().unwrap(), "nada.html", false).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Content-Type: text/html; charset=utf-8\r\n"));
        assert!(text.ends_with("\r\n\r\n<h1>no existe</h1>"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_404_page_propagates_error() {
        let dir = temp_content_dir("broken");
        fs::remove_file(dir.join("404.html")).unwrap();

        let mut sink: Vec<u8> = Vec::new();
        let result = handle_get(&mut sink, dir.to_str().unwrap(), "nada.html", false);

        assert!(result.is_err());
        assert!(sink.is_empty()); // no se mandó nada al cliente

        fs::remove_dir_all(&dir).ok();
    }
}
