use serde::{Deserialize, Serialize};

/// Estado de autenticación e identidad del navegador actual.
///
/// Invariante: `is_admin` implica `authenticated`. Los constructores públicos
/// nunca producen una sesión admin sin autenticar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub is_admin: bool,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

/// Estado de la máquina de sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    AuthenticatedUser,
    AuthenticatedAdmin,
}

/// Rol resultante de comparar credenciales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Session {
    /// Sesión vacía (primer arranque o tras logout)
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Sesión autenticada con el rol dado; conserva el perfil cacheado
    pub fn authenticated(role: Role, user_name: Option<String>, user_email: Option<String>) -> Self {
        Self {
            authenticated: true,
            is_admin: role == Role::Admin,
            user_name,
            user_email,
        }
    }

    pub fn phase(&self) -> AuthPhase {
        match (self.authenticated, self.is_admin) {
            (true, true) => AuthPhase::AuthenticatedAdmin,
            (true, false) => AuthPhase::AuthenticatedUser,
            _ => AuthPhase::Anonymous,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.phase() == AuthPhase::Anonymous
    }

    /// Nombre a mostrar en el saludo del dashboard
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }

    /// Restablece la invariante si llega algo incoherente del almacenamiento
    pub fn normalized(mut self) -> Self {
        if !self.authenticated {
            self.is_admin = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert_eq!(session.phase(), AuthPhase::Anonymous);
        assert!(!session.is_admin);
    }

    #[test]
    fn admin_role_yields_admin_phase() {
        let session = Session::authenticated(Role::Admin, None, None);
        assert!(session.authenticated);
        assert_eq!(session.phase(), AuthPhase::AuthenticatedAdmin);
    }

    #[test]
    fn normalized_drops_admin_without_auth() {
        let broken = Session {
            authenticated: false,
            is_admin: true,
            ..Session::default()
        };
        assert!(!broken.normalized().is_admin);
    }

    #[test]
    fn display_name_falls_back_to_user() {
        let mut session = Session::authenticated(Role::User, Some(String::new()), None);
        assert_eq!(session.display_name(), "User");
        session.user_name = Some("Jane".into());
        assert_eq!(session.display_name(), "Jane");
    }
}
