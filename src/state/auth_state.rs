// ============================================================================
// AUTH STATE - Máquina de estados de la sesión
// ============================================================================
// Anonymous --login(user)/signup--> AuthenticatedUser
// Anonymous --login(admin)--------> AuthenticatedAdmin
// Authenticated* --logout---------> Anonymous
//
// Único escritor del `SessionStore`. Lee el almacén una sola vez (bootstrap);
// cada operación calcula la sesión completa, la persiste y después notifica
// una sola vez, así ningún observador ve una sesión a medias.
// ============================================================================

use log::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AuthPhase, Role, Session};
use crate::services::auth_service;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::stores::{BrowserSessionStore, SessionStore};

pub struct AuthContext<S: SessionStore = BrowserSessionStore> {
    store: S,
    state: ReactiveState<Session>,
}

impl<S: SessionStore> AuthContext<S> {
    /// Crea el contexto con la sesión persistida (única lectura del almacén)
    pub fn bootstrap(store: S) -> Self {
        let session = store.read();
        info!("🔐 Sesión restaurada: {:?}", session.phase());
        Self {
            store,
            state: ReactiveState::new(session),
        }
    }

    pub fn session(&self) -> Session {
        self.state.get()
    }

    pub fn phase(&self) -> AuthPhase {
        self.session().phase()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.session().is_admin
    }

    /// Compara con los pares reservados. Sólo desde `Anonymous`.
    pub fn login(&self, identifier: &str, secret: &str) -> bool {
        let current = self.session();
        if !current.is_anonymous() {
            warn!("⚠️ Login ignorado: ya hay una sesión iniciada");
            return false;
        }

        match auth_service::authenticate(identifier, secret) {
            Ok(role) => {
                info!("✅ Login correcto ({:?})", role);
                self.commit(Session::authenticated(
                    role,
                    current.user_name,
                    current.user_email,
                ));
                true
            }
            Err(e) => {
                warn!("❌ Login fallido: {}", e);
                false
            }
        }
    }

    /// Alta sin comprobaciones; la validación de campos es cosa del formulario
    pub fn signup(&self, name: &str, identifier: &str, _secret: &str) -> bool {
        if !self.session().is_anonymous() {
            warn!("⚠️ Signup ignorado: ya hay una sesión iniciada");
            return false;
        }

        info!("✅ Cuenta creada para {}", identifier);
        self.commit(Session::authenticated(
            Role::User,
            Some(name.to_string()),
            Some(identifier.to_string()),
        ));
        true
    }

    /// Borra la sesión entera; siempre termina en `Anonymous`
    pub fn logout(&self) {
        self.store.clear();
        self.state.set(Session::anonymous());
        info!("👋 Logout");
    }

    /// Guarda nombre y email del perfil en la sesión
    pub fn update_profile(&self, name: &str, email: &str) -> AppResult<()> {
        let current = self.session();
        if current.is_anonymous() {
            return Err(AppError::NotAuthenticated);
        }

        self.commit(Session {
            user_name: Some(name.to_string()),
            user_email: Some(email.to_string()),
            ..current
        });
        info!("💾 Perfil actualizado");
        Ok(())
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    fn commit(&self, session: Session) {
        log::debug!(
            "💾 Sesión guardada: {}",
            serde_json::to_string(&session).unwrap_or_default()
        );
        self.store.write(&session);
        self.state.set(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{KeyValueSessionStore, MemoryStorage};

    fn context() -> AuthContext<KeyValueSessionStore<MemoryStorage>> {
        AuthContext::bootstrap(KeyValueSessionStore::new(MemoryStorage::new()))
    }

    #[test]
    fn starts_anonymous_on_empty_storage() {
        assert_eq!(context().phase(), AuthPhase::Anonymous);
    }

    #[test]
    fn standard_credentials_give_user_phase() {
        let auth = context();
        assert!(auth.login("user@example.com", "password"));
        assert_eq!(auth.phase(), AuthPhase::AuthenticatedUser);
    }

    #[test]
    fn no_escalation_without_logout() {
        let auth = context();
        assert!(auth.login("user@example.com", "password"));
        assert!(!auth.login("admin@example.com", "admin"));
        assert_eq!(auth.phase(), AuthPhase::AuthenticatedUser);

        auth.logout();
        assert!(auth.login("admin@example.com", "admin"));
        assert_eq!(auth.phase(), AuthPhase::AuthenticatedAdmin);
    }

    #[test]
    fn update_profile_requires_session() {
        let auth = context();
        assert_eq!(
            auth.update_profile("Jane", "jane@x.com"),
            Err(AppError::NotAuthenticated)
        );
        auth.signup("Jane", "jane@x.com", "pw");
        auth.update_profile("Jane Roe", "roe@x.com").unwrap();
        assert_eq!(auth.session().user_name.as_deref(), Some("Jane Roe"));
        assert!(auth.is_authenticated());
    }
}
