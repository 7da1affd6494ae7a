//! # Almacén de Usuarios
//! src/api/store.rs
//!
//! Persistencia del registro de usuarios en un archivo JSON (un array
//! de valores opacos). El archivo es el único recurso mutable
//! compartido entre conexiones, así que todo el ciclo
//! leer-parsear-agregar-reescribir se hace bajo un mutex: dos
//! registros concurrentes nunca se pisan.

use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::sync::Mutex;

/// Almacén de usuarios respaldado por un archivo JSON
///
/// Se crea una sola instancia por servidor y se comparte (vía `Arc`)
/// entre todos los threads de conexión.
pub struct UserStore {
    /// Ruta al archivo JSON (array de usuarios)
    path: String,

    /// Serializa los ciclos leer-modificar-escribir
    lock: Mutex<()>,
}

impl UserStore {
    /// Crea un almacén sobre la ruta indicada
    ///
    /// No toca el archivo: se lee y reescribe en cada registro.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            lock: Mutex::new(()),
        }
    }

    /// Agrega un usuario al final del array y reescribe el archivo
    ///
    /// Toma el lock durante todo el ciclo. La escritura va primero a un
    /// archivo temporal y después se renombra, igual que cualquier
    /// rewrite completo: el archivo nunca queda a medias.
    pub fn register(&self, user: Value) -> std::io::Result<()> {
        let _guard = self.lock.lock().unwrap();

        let mut users = self.load_users()?;
        users.push(user);
        self.save_users(&users)
    }

    /// Lee el array completo de usuarios (para tests y diagnóstico)
    pub fn users(&self) -> std::io::Result<Vec<Value>> {
        let _guard = self.lock.lock().unwrap();
        self.load_users()
    }

    /// Carga el array desde el archivo
    ///
    /// Archivo inexistente o corrupto → array vacío. La corrupción no
    /// se reporta; el siguiente registro reescribe el archivo limpio.
    fn load_users(&self) -> std::io::Result<Vec<Value>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(users) => Ok(users),
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Reescribe el array completo al archivo
    fn save_users(&self, users: &[Value]) -> std::io::Result<()> {
        let temp_path = format!("{}.tmp", self.path);
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, users)
            .map_err(|e| std::io::Error::new(ErrorKind::Other, e))?;
        writer.flush()?;

        // Rename atómico sobre el archivo real
        fs::rename(&temp_path, &self.path)
    }
}
