//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP
//! y enviarlas al cliente en una sola escritura.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Server: ServidorWeb/0.1\r\n
//! Content-Type: text/html; charset=utf-8\r\n
//! Content-Length: 11\r\n
//! \r\n
//! <h1>hi</h1>
//! ```
//!
//! Los headers se emiten en el orden exacto de inserción; no se
//! deduplican ni se validan nombres o valores.

use super::StatusCode;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Valor del header `Server` en todas las respuestas
pub const SERVER: &str = "ServidorWeb/0.1";

/// Representa una respuesta HTTP completa
///
/// Se construye de forma incremental, se envía exactamente una vez y
/// se descarta al cerrar la conexión.
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado (200, 301 o 404)
    status: StatusCode,

    /// Headers en orden de inserción (el orden importa en el wire)
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (posiblemente comprimido con gzip)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_web::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok);
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Crea una redirección 301 con los headers `Server` y `Location`
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_web::http::Response;
    ///
    /// let response = Response::redirect("/index.html");
    /// let text = String::from_utf8(response.to_bytes()).unwrap();
    /// assert!(text.starts_with("HTTP/1.1 301 Moved Permanently\r\n"));
    /// ```
    pub fn redirect(location: &str) -> Self {
        let mut response = Response::new(StatusCode::MovedPermanently);
        response.append_header("Server", SERVER);
        response.append_header("Location", location);
        response
    }

    /// Agrega un header al final de la lista
    ///
    /// No valida nombre ni valor, y no elimina duplicados.
    pub fn append_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Establece el body y los headers asociados
    ///
    /// Siempre agrega `Content-Type` con el MIME recibido. Si
    /// `supports_gzip` es true, comprime el body con gzip y agrega
    /// `Content-Encoding: gzip`; `Content-Length` refleja en ambos
    /// casos la longitud exacta de los bytes que irán al socket.
    pub fn append_body(
        &mut self,
        content_type: &str,
        body: &[u8],
        supports_gzip: bool,
    ) -> std::io::Result<()> {
        self.append_header("Content-Type", content_type);

        if supports_gzip {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(body)?;
            let gzipped = encoder.finish()?;

            self.append_header("Content-Encoding", "gzip");
            self.append_header("Content-Length", &gzipped.len().to_string());
            self.body = gzipped;
        } else {
            self.append_header("Content-Length", &body.len().to_string());
            self.body = body.to_vec();
        }

        Ok(())
    }

    /// Materializa la respuesta completa como bytes listos para el socket
    ///
    /// Status line, headers en orden de inserción, línea vacía y body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        result.extend_from_slice(self.status.status_line().as_bytes());
        result.extend_from_slice(b"\r\n");

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Envía la respuesta completa por el socket
    ///
    /// `write_all` garantiza que se transmiten todos los bytes o que la
    /// llamada falla con un error de transporte; nunca hay una escritura
    /// parcial silenciosa.
    pub fn send_to(&self, stream: &mut impl Write) -> std::io::Result<()> {
        stream.write_all(&self.to_bytes())?;
        stream.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
