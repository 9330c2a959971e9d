// ============================================================================
// ERRORES DE LA APP
// ============================================================================
// Taxonomía mínima: credenciales, validación de formularios, acceso y
// almacenamiento. Ningún error es fatal; las vistas los convierten en toasts
// o redirecciones.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// El par (identificador, secreto) no coincide con ningún par reservado
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Campo obligatorio ausente; el mensaje se muestra tal cual al usuario
    #[error("{0}")]
    Validation(String),

    /// Operación que exige sesión iniciada
    #[error("You must be logged in to do that")]
    NotAuthenticated,

    /// Ruta reservada a administradores
    #[error("You do not have permission to access the admin dashboard.")]
    AccessDenied,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_user_facing() {
        let err = AppError::validation("Please enter your email address");
        assert_eq!(err.to_string(), "Please enter your email address");
    }

    #[test]
    fn access_denied_matches_toast_text() {
        assert_eq!(
            AppError::AccessDenied.to_string(),
            "You do not have permission to access the admin dashboard."
        );
    }
}
