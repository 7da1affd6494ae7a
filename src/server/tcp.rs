//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Loop de accept y manejo de conexiones. Cada conexión aceptada se
//! procesa en su propio thread; el loop de accept nunca bloquea en I/O
//! de clientes y ningún fallo de una conexión lo afecta.
//!
//! ## Ciclo de vida de una conexión
//!
//! ```text
//! ACCEPTED → READING → PARSED → ROUTED → RESPONDED → CLOSED
//! ```
//!
//! El cierre ocurre siempre (el stream se dropea al salir del handler),
//! se haya enviado respuesta o no.

use crate::api::{self, UserStore, API_PREFIX};
use crate::config::Config;
use crate::content;
use crate::http::{Method, Request};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Servidor web HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    content_dir: Arc<String>,
    store: Arc<UserStore>,
    listener: Option<TcpListener>,
}

impl Server {
    /// Crea el servidor a partir de la configuración
    ///
    /// El directorio de contenido y el almacén de usuarios se comparten
    /// con cada thread de conexión vía `Arc`; no hay estado global.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(UserStore::new(&config.users_path()));
        let content_dir = Arc::new(config.content_directory.clone());

        Self {
            config,
            content_dir,
            store,
            listener: None,
        }
    }

    /// Bindea el socket de escucha y retorna la dirección local
    ///
    /// Separado de [`Server::run`] para que los tests puedan bindear el
    /// puerto 0 y descubrir el puerto efímero asignado.
    pub fn bind(&mut self) -> std::io::Result<SocketAddr> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        let local_addr = listener.local_addr()?;
        println!("[+] Servidor escuchando en {}", local_addr);

        self.listener = Some(listener);
        Ok(local_addr)
    }

    /// Loop principal: acepta conexiones y les dedica un thread a cada una
    ///
    /// El loop es infinito; un error de accept se registra y se sigue
    /// aceptando.
    pub fn run(&mut self) -> std::io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = self.listener.as_ref().unwrap();

        println!("[*] Modo concurrente: un thread por conexion\n");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let content_dir = Arc::clone(&self.content_dir);
                    let store = Arc::clone(&self.store);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!(" ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, &content_dir, &store) {
                            eprintln!("   ❌ Error en thread: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }
}

/// Maneja una conexión completa: leer → parsear → enrutar → responder
///
/// Política de errores:
/// - peer cerrado antes de un request completo → retorno silencioso
/// - request malformado → cierre sin respuesta (no se escala)
/// - errores de transporte o filesystem → se propagan y el thread los
///   registra; nunca cruzan a otras conexiones
pub fn handle_connection(
    mut stream: TcpStream,
    content_dir: &str,
    store: &UserStore,
) -> std::io::Result<()> {
    // READING: acumular bytes hasta tener el bloque de headers completo
    let raw = match Request::read_raw(&mut stream)? {
        Some(raw) => raw,
        None => {
            println!("   [!] peer closed before sending a full request");
            return Ok(());
        }
    };

    // PARSED
    let mut request = match Request::parse(&raw) {
        Ok(request) => request,
        Err(e) => {
            println!("   [!] parse error, closing without response: {}", e);
            return Ok(());
        }
    };

    println!("   [*] {} {}", request.method().as_str(), request.path());

    // ROUTED → RESPONDED
    let supports_gzip = request.supports_gzip();

    if request.method() == Method::POST && request.path().starts_with(API_PREFIX) {
        // El body puede llegar repartido en varios paquetes
        request.read_body(&mut stream)?;

        let api_path = request.path()[API_PREFIX.len()..].to_string();
        api::handle(
            &mut stream,
            request.method(),
            &api_path,
            request.body(),
            supports_gzip,
            content_dir,
            store,
        )?;
    } else if request.method() == Method::GET {
        content::handle_get(&mut stream, content_dir, request.path(), supports_gzip)?;
    } else {
        // Verbo sin handler (ej: POST fuera del API): cierre sin respuesta
        println!(
            "   [!] no handler for {} {}",
            request.method().as_str(),
            request.path()
        );
    }

    // CLOSED: el stream se dropea aquí, con o sin respuesta enviada
    Ok(())
}
