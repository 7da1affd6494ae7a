//! # API del Servidor
//! src/api/mod.rs
//!
//! Despacho de las llamadas al API (paths bajo el prefijo `api/`).
//!
//! ## Arquitectura
//!
//! ```text
//! (Method, path) → match → handler → 301 /index.html
//! ```
//!
//! El despacho es un match sobre el par (método, path); hoy existe una
//! sola ruta: `POST api/register-user`. Un par sin ruta registrada no
//! tumba la conexión: responde el 404 normal del servidor.

pub mod store;

pub use store::UserStore;

use crate::content;
use crate::http::{Method, Response};
use std::io::Write;

/// Prefijo de path bajo el que viven todas las rutas del API
pub const API_PREFIX: &str = "api/";

/// Despacha una llamada al API y envía la respuesta
///
/// `path` llega ya sin el prefijo `api/`. Para una ruta registrada, la
/// única respuesta visible es la redirección 301 a `/index.html`,
/// independientemente de que el handler haya funcionado; los errores
/// del handler se registran en el log del servidor y nada más.
pub fn handle(
    stream: &mut impl Write,
    method: Method,
    path: &str,
    body: &[u8],
    supports_gzip: bool,
    content_dir: &str,
    store: &UserStore,
) -> std::io::Result<()> {
    match (method, path) {
        (Method::POST, "register-user") => {
            if let Err(e) = register_user(body, store) {
                eprintln!("   [!] register-user failed: {}", e);
            }
            Response::redirect("/index.html").send_to(stream)
        }
        _ => {
            println!("   [!] no API route for {} {}", method.as_str(), path);
            content::not_found_response(content_dir, supports_gzip)?.send_to(stream)
        }
    }
}

/// Handler de `POST api/register-user`
///
/// Parsea el body como un valor JSON y lo agrega al array del almacén.
fn register_user(body: &[u8], store: &UserStore) -> std::io::Result<()> {
    let user: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    store.register(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;

    /// Directorio de contenido temporal con 404.html y almacén vacío
    fn temp_setup(tag: &str) -> (PathBuf, UserStore) {
        let dir = std::env::temp_dir().join(format!("servidor_web_api_{}_{}", tag, std::process::id()));
        fs::create_dir_all(dir.join("resurse")).unwrap();
        fs::write(dir.join("404.html"), "<h1>no existe</h1>").unwrap();

        let store_path = dir.join("resurse/utilizatori.json");
        fs::write(&store_path, "[]").unwrap();

        let store = UserStore::new(store_path.to_str().unwrap());
        (dir, store)
    }

    #[test]
    fn test_register_user_appends_and_redirects() {
        let (dir, store) = temp_setup("register");

        let mut sink: Vec<u8> = Vec::new();
        handle(
            &mut sink,
            Method::POST,
            "register-user",
            b"{\"name\":\"alice\"}",
            false,
            dir.to_str().unwrap(),
            &store,
        )
        .unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("HTTP/1.1 301 Moved Permanently\r\n"));
        assert!(text.contains("Location: /index.html\r\n"));

        let users = store.users().unwrap();
        assert_eq!(users, vec![json!({"name": "alice"})]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_body_still_redirects() {
        let (dir, store) = temp_setup("invalid_body");

        let mut sink: Vec<u8> = Vec::new();
        handle(
            &mut sink,
            Method::POST,
            "register-user",
            b"esto no es json",
            false,
            dir.to_str().unwrap(),
            &store,
        )
        .unwrap();

        // El cliente recibe la redirección igualmente
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("301 Moved Permanently"));

        // Pero el almacén no cambió
        assert!(store.users().unwrap().is_empty());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_route_returns_404() {
        let (dir, store) = temp_setup("unknown");

        let mut sink: Vec<u8> = Vec::new();
        handle(
            &mut sink,
            Method::POST,
            "delete-user",
            b"{}",
            false,
            dir.to_str().unwrap(),
            &store,
        )
        .unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.ends_with("<h1>no existe</h1>"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_method_returns_404() {
        let (dir, store) = temp_setup("wrong_method");

        let mut sink: Vec<u8> = Vec::new();
        handle(
            &mut sink,
            Method::GET,
            "register-user",
            b"",
            false,
            dir.to_str().unwrap(),
            &store,
        )
        .unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("404 Not Found"));
        assert!(store.users().unwrap().is_empty());

        fs::remove_dir_all(&dir).ok();
    }
}
