//! # Módulo Server
//!
//! Loop de escucha TCP y manejo de conexiones concurrentes.

pub mod tcp;

pub use tcp::Server;
