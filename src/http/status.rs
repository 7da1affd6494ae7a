//! # Códigos de Estado HTTP
//!
//! Este módulo define los códigos de estado que usa el servidor.
//! El protocolo de respuesta es deliberadamente pequeño: solo tres
//! status lines posibles.
//!
//! - **200 OK**: recurso servido correctamente
//! - **301 Moved Permanently**: redirección (raíz → /index.html, y tras un POST al API)
//! - **404 Not Found**: recurso inexistente (se sirve la página 404.html)

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 301 Moved Permanently - Redirección permanente (header `Location`)
    MovedPermanently = 301,

    /// 404 Not Found - Recurso no encontrado
    NotFound = 404,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_web::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_web::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Retorna la status line completa tal como va al socket (sin `\r\n`)
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_web::http::StatusCode;
    /// assert_eq!(StatusCode::MovedPermanently.status_line(), "HTTP/1.1 301 Moved Permanently");
    /// ```
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}", self.as_u16(), self.reason_phrase())
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
