// ============================================================================
// AUTH SERVICE - Comprobación de credenciales de demostración
// ============================================================================
// Comparación literal con dos pares reservados. No hay hash, ni bloqueo,
// ni límite de intentos: es una demo, no una frontera de seguridad.
// ============================================================================

use crate::error::{AppError, AppResult};
use crate::models::Role;
use crate::utils::constants::{
    DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, DEMO_USER_EMAIL, DEMO_USER_PASSWORD,
};

/// Rol asociado al par (identificador, secreto)
pub fn authenticate(identifier: &str, secret: &str) -> AppResult<Role> {
    match (identifier, secret) {
        (DEMO_USER_EMAIL, DEMO_USER_PASSWORD) => Ok(Role::User),
        (DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD) => Ok(Role::Admin),
        _ => Err(AppError::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_pairs_map_to_roles() {
        assert_eq!(authenticate("user@example.com", "password"), Ok(Role::User));
        assert_eq!(authenticate("admin@example.com", "admin"), Ok(Role::Admin));
    }

    #[test]
    fn crossed_or_padded_pairs_fail() {
        for (id, secret) in [
            ("user@example.com", "admin"),
            ("admin@example.com", "password"),
            ("USER@example.com", "password"),
            (" user@example.com", "password"),
            ("", ""),
        ] {
            assert_eq!(authenticate(id, secret), Err(AppError::InvalidCredentials));
        }
    }
}
