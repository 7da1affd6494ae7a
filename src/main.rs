//! # Servidor Web - Entry Point
//! src/main.rs
//!
//! Punto de entrada: parsea la configuración, la valida y arranca el
//! loop de escucha.

use servidor_web::config::Config;
use servidor_web::server::Server;

fn main() {
    println!("=================================");
    println!("  ServidorWeb HTTP/1.1");
    println!("=================================\n");

    // Configuración desde CLI / variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
