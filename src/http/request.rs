//! # Lectura y Parsing de Requests
//! src/http/request.rs
//!
//! Este módulo implementa la lectura incremental desde el socket y el
//! parsing de la request line.
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Host: localhost:5678\r\n
//! Accept-Encoding: gzip, deflate\r\n
//! \r\n
//! ```
//!
//! ## Modelo de lectura
//!
//! Se lee del socket en bloques de hasta 1024 bytes, acumulando en un
//! buffer, hasta que el buffer contiene el separador de headers
//! (`\r\n\r\n`). Para un POST, después del parsing se sigue leyendo
//! hasta acumular `Content-Length` bytes de body; el primer burst de
//! red no tiene por qué traer el body completo.

use std::io::Read;

/// Tamaño máximo de cada lectura del socket
const READ_CHUNK_SIZE: usize = 1024;

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso estático
    GET,

    /// POST - Llamada al API (registro de usuarios)
    POST,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es soportado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// El buffer no contiene todavía el separador de headers
    IncompleteRequest,

    /// Formato inválido de la request line
    InvalidRequestLine,

    /// Método HTTP no soportado
    UnsupportedMethod(String),

    /// Versión HTTP incorrecta (debe ser HTTP/1.0 o HTTP/1.1)
    InvalidHttpVersion(String),

    /// Request vacío
    EmptyRequest,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncompleteRequest => write!(f, "Incomplete HTTP request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::InvalidHttpVersion(v) => write!(f, "Invalid HTTP version: {}", v),
            ParseError::EmptyRequest => write!(f, "Empty request"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Representa un request parseado
///
/// Se construye una sola vez por conexión y es inmutable después del
/// parsing, con la única excepción de [`Request::read_body`], que
/// completa el body de un POST.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST)
    method: Method,

    /// Path del recurso, sin la barra inicial (ej: "index.html")
    path: String,

    /// Versión HTTP declarada por el cliente
    version: String,

    /// Bloque crudo de headers, tal como llegó del socket
    headers: String,

    /// Body del request (vacío salvo en POST)
    body: Vec<u8>,
}

/// Busca una subsecuencia de bytes dentro de un buffer
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

impl Request {
    /// Lee del socket hasta acumular un bloque de headers completo
    ///
    /// Lee en bloques de hasta 1024 bytes, concatenando, hasta que el
    /// buffer contiene `\r\n\r\n`.
    ///
    /// # Retorna
    ///
    /// * `Ok(Some(buffer))` - Bytes acumulados (headers completos, y
    ///   posiblemente parte del body)
    /// * `Ok(None)` - El peer cerró la conexión antes de completar los
    ///   headers; no hay nada que responder
    /// * `Err(_)` - Error de transporte en el socket
    pub fn read_raw(stream: &mut impl Read) -> std::io::Result<Option<Vec<u8>>> {
        let mut raw: Vec<u8> = Vec::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        while find_subsequence(&raw, b"\r\n\r\n").is_none() {
            let bytes_read = stream.read(&mut chunk)?;
            if bytes_read == 0 {
                // read() de 0 bytes = peer cerrado; sin esto el loop no terminaría nunca
                return Ok(None);
            }
            raw.extend_from_slice(&chunk[..bytes_read]);
        }

        Ok(Some(raw))
    }

    /// Parsea un request desde el buffer acumulado
    ///
    /// La request line es el substring anterior al primer `\r\n`, y se
    /// separa por espacios en exactamente tres tokens: método, target y
    /// versión. La barra inicial del target se elimina para obtener el
    /// path relativo al directorio de contenido.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use servidor_web::http::Request;
    ///
    /// let raw = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "index.html");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let separator =
            find_subsequence(buffer, b"\r\n\r\n").ok_or(ParseError::IncompleteRequest)?;

        // Headers en UTF-8; el body se conserva como bytes crudos
        let head = std::str::from_utf8(&buffer[..separator])
            .map_err(|_| ParseError::InvalidRequestLine)?;

        if head.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let (start_line, header_block) = match head.find("\r\n") {
            Some(pos) => (&head[..pos], &head[pos + 2..]),
            None => (head, ""),
        };

        let parts: Vec<&str> = start_line.split(' ').collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        let method = Method::from_str(parts[0])?;

        // Quitar la barra inicial: "/index.html" -> "index.html"
        let path = parts[1].strip_prefix('/').unwrap_or(parts[1]).to_string();

        let version = parts[2].to_string();
        if version != "HTTP/1.0" && version != "HTTP/1.1" {
            return Err(ParseError::InvalidHttpVersion(version));
        }

        Ok(Request {
            method,
            path,
            version,
            headers: header_block.to_string(),
            body: buffer[separator + 4..].to_vec(),
        })
    }

    /// Completa el body de un POST leyendo hasta `Content-Length` bytes
    ///
    /// El burst inicial puede traer solo parte del body (o nada). Si el
    /// request no es POST o no declara `Content-Length`, no se lee más.
    /// Si el peer cierra a mitad del body, nos quedamos con lo recibido.
    /// El body nunca excede `Content-Length`: los bytes sobrantes de un
    /// cliente que manda de más se descartan.
    pub fn read_body(&mut self, stream: &mut impl Read) -> std::io::Result<()> {
        if self.method != Method::POST {
            return Ok(());
        }

        let expected = match self.content_length() {
            Some(len) => len,
            None => return Ok(()),
        };

        // El burst inicial puede traer bytes de más tras el body declarado
        self.body.truncate(expected);

        let mut chunk = [0u8; READ_CHUNK_SIZE];
        while self.body.len() < expected {
            let bytes_read = stream.read(&mut chunk)?;
            if bytes_read == 0 {
                break;
            }
            // Nunca acumular más allá de Content-Length
            let remaining = expected - self.body.len();
            self.body.extend_from_slice(&chunk[..bytes_read.min(remaining)]);
        }

        Ok(())
    }

    /// Indica si el cliente anunció soporte de gzip
    ///
    /// Busca el substring `Accept-Encoding` en el bloque de headers,
    /// acotado por el `\r\n` siguiente, y comprueba si contiene `gzip`.
    pub fn supports_gzip(&self) -> bool {
        let start = match self.headers.find("Accept-Encoding") {
            Some(pos) => pos,
            None => return false,
        };

        let rest = &self.headers[start..];
        let end = rest.find("\r\n").unwrap_or(rest.len());

        rest[..end].contains("gzip")
    }

    /// Obtiene el valor del header `Content-Length`, si está presente
    pub fn content_length(&self) -> Option<usize> {
        for line in self.headers.split("\r\n") {
            if let Some(colon) = line.find(':') {
                if line[..colon].trim().eq_ignore_ascii_case("content-length") {
                    return line[colon + 1..].trim().parse().ok();
                }
            }
        }
        None
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request (sin barra inicial)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene el bloque crudo de headers
    pub fn headers(&self) -> &str {
        &self.headers
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
