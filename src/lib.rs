//! # Servidor Web
//! src/lib.rs
//!
//! Servidor web HTTP/1.1 concurrente que sirve contenido estático desde
//! un directorio y expone una llamada de registro por POST con body
//! JSON. Un thread por conexión; una conexión transporta exactamente un
//! request y una response.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: lectura/parsing de requests y construcción de responses
//! - `content`: servicio de archivos estáticos (MIME, 404, redirección raíz)
//! - `api`: despacho de llamadas al API y almacén de usuarios
//! - `server`: loop de escucha TCP y manejo de conexiones
//! - `config`: configuración CLI / variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use servidor_web::config::Config;
//! use servidor_web::server::Server;
//!
//! let config = Config::new();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod api;
pub mod config;
pub mod content;
pub mod http;
pub mod server;
