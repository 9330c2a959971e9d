// ============================================================================
// SESSION STORE - Registro persistido de la sesión
// ============================================================================
// Cuatro claves de texto (ver `utils::constants`). `read` nunca falla: una
// clave ausente o mal formada vale su estado por defecto.
// ============================================================================

use log::{error, info};

use crate::models::Session;
use crate::stores::storage::{BrowserStorage, KeyValueStorage};
use crate::utils::constants::{
    SESSION_KEYS, STORAGE_KEY_ADMIN, STORAGE_KEY_AUTHENTICATED, STORAGE_KEY_USER_EMAIL,
    STORAGE_KEY_USER_NAME,
};

/// Interfaz inyectable del almacén de sesión
pub trait SessionStore {
    fn read(&self) -> Session;
    fn write(&self, session: &Session);
    fn clear(&self);
}

/// Almacén de sesión sobre cualquier backend clave/valor
#[derive(Debug, Clone, Default)]
pub struct KeyValueSessionStore<B: KeyValueStorage> {
    backend: B,
}

/// Almacén usado por la app en el navegador
pub type BrowserSessionStore = KeyValueSessionStore<BrowserStorage>;

impl<B: KeyValueStorage> KeyValueSessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn flag(&self, key: &str) -> bool {
        self.backend.get(key).as_deref() == Some("true")
    }

    fn put(&self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                // Fallo de cuota o modo privado: se registra y se sigue
                if let Err(e) = self.backend.set(key, value) {
                    error!("❌ {}", e);
                }
            }
            None => self.backend.remove(key),
        }
    }
}

impl<B: KeyValueStorage> SessionStore for KeyValueSessionStore<B> {
    fn read(&self) -> Session {
        Session {
            authenticated: self.flag(STORAGE_KEY_AUTHENTICATED),
            is_admin: self.flag(STORAGE_KEY_ADMIN),
            user_name: self.backend.get(STORAGE_KEY_USER_NAME),
            user_email: self.backend.get(STORAGE_KEY_USER_EMAIL),
        }
        .normalized()
    }

    fn write(&self, session: &Session) {
        let admin = if session.is_admin { "true" } else { "false" };
        self.put(
            STORAGE_KEY_AUTHENTICATED,
            session.authenticated.then_some("true"),
        );
        self.put(STORAGE_KEY_ADMIN, session.authenticated.then_some(admin));
        self.put(STORAGE_KEY_USER_NAME, session.user_name.as_deref());
        self.put(STORAGE_KEY_USER_EMAIL, session.user_email.as_deref());
    }

    fn clear(&self) {
        for key in SESSION_KEYS {
            self.backend.remove(key);
        }
        info!("🧹 Sesión eliminada del almacenamiento");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::stores::storage::MemoryStorage;

    fn store() -> KeyValueSessionStore<MemoryStorage> {
        KeyValueSessionStore::new(MemoryStorage::new())
    }

    #[test]
    fn empty_storage_reads_anonymous() {
        assert_eq!(store().read(), Session::anonymous());
    }

    #[test]
    fn write_uses_string_flags() {
        let store = store();
        store.write(&Session::authenticated(Role::User, None, None));
        let backend = store.backend();
        assert_eq!(backend.get("isAuthenticated").as_deref(), Some("true"));
        assert_eq!(backend.get("isAdmin").as_deref(), Some("false"));
        assert_eq!(backend.get("userName"), None);
    }

    #[test]
    fn malformed_flags_default_to_unset() {
        let store = KeyValueSessionStore::new(MemoryStorage::with_entries([
            ("isAuthenticated", "yes"),
            ("isAdmin", "true"),
        ]));
        let session = store.read();
        assert!(!session.authenticated);
        assert!(!session.is_admin);
    }

    #[test]
    fn clear_removes_every_key() {
        let store = store();
        store.write(&Session::authenticated(
            Role::Admin,
            Some("Ana".into()),
            Some("ana@example.com".into()),
        ));
        store.clear();
        assert!(store.backend().is_empty());
    }
}
