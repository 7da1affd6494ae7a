//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor web con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./servidor_web ./contenido --port 5678
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=5678 HTTP_HOST=0.0.0.0 ./servidor_web ./contenido
//! ```

use clap::Parser;
use std::path::Path;

/// Configuración del servidor web HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "servidor_web")]
#[command(about = "Servidor web concurrente: contenido estatico + API de registro")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Directorio raíz con el contenido estático a servir
    #[arg(env = "CONTENT_DIRECTORY")]
    pub content_directory: String,

    /// Puerto en el que escucha el servidor (0 = puerto efímero, útil en tests)
    #[arg(short, long, default_value = "5678", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```ignore
    /// use servidor_web::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ruta del archivo JSON donde se registran los usuarios
    pub fn users_path(&self) -> String {
        format!("{}/resurse/utilizatori.json", self.content_directory)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.content_directory.is_empty() {
            return Err("Content directory must not be empty".to_string());
        }

        let dir = Path::new(&self.content_directory);
        if !dir.exists() {
            return Err(format!(
                "Content directory does not exist: {}",
                self.content_directory
            ));
        }
        if !dir.is_dir() {
            return Err(format!(
                "Content directory is not a directory: {}",
                self.content_directory
            ));
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        println!("   Address:      {}", self.address());
        println!("   Content dir:  {}", self.content_directory);
        println!("   User store:   {}", self.users_path());
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto (usada principalmente en tests)
    fn default() -> Self {
        Self {
            content_directory: "./contenido".to_string(),
            port: 5678,
            host: "0.0.0.0".to_string(),
        }
    }
}
