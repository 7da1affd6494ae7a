//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.1 que necesita el
//! servidor, sin librerías de alto nivel. Incluye:
//!
//! - Lectura incremental y parsing de requests
//! - Construcción de responses (con gzip opcional)
//! - Manejo de status codes
//!
//! ## Modelo de conexión
//!
//! Una conexión transporta exactamente un request y una response; no
//! hay keep-alive, chunked transfer encoding ni pipelining.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Accept-Encoding: gzip, deflate\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Server: ServidorWeb/0.1\r\n
//! Content-Type: text/html; charset=utf-8\r\n
//! Content-Length: 11\r\n
//! \r\n
//! <h1>hi</h1>
//! ```

pub mod request;   // Lectura y parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
