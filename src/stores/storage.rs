// ============================================================================
// STORAGE BACKENDS - Almacén clave/valor de cadenas
// ============================================================================
// `BrowserStorage` escribe en `localStorage` sin serializar (los valores se
// guardan tal cual: "true", "Jane"...). `MemoryStorage` es el doble de
// pruebas y comparte su mapa entre clones.
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::{AppError, AppResult};

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str);
}

/// `localStorage` si existe; `None` sin ventana, con cookies bloqueadas o
/// dentro de un iframe sandbox
#[cfg(target_arch = "wasm32")]
pub fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Fuera del navegador no hay `localStorage`
#[cfg(not(target_arch = "wasm32"))]
pub fn get_local_storage() -> Option<web_sys::Storage> {
    None
}

/// `localStorage` del navegador. Sin almacenamiento disponible las lecturas
/// devuelven `None`, las escrituras un `AppError::Storage` y los borrados no
/// hacen nada.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn is_available(&self) -> bool {
        get_local_storage().is_some()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let storage = get_local_storage()
            .ok_or_else(|| AppError::Storage("localStorage no disponible".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Error guardando '{}' en localStorage", key)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Almacén en memoria; los clones ven los mismos datos
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Almacén precargado, p.ej. para simular una recarga con sesión guardada
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        for (key, value) in entries {
            storage
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("userName", "Jane").unwrap();
        assert_eq!(other.get("userName").as_deref(), Some("Jane"));
        other.remove("userName");
        assert!(storage.is_empty());
    }

    #[test]
    fn browser_storage_without_local_storage_degrades() {
        let storage = BrowserStorage;
        assert!(!storage.is_available());
        assert_eq!(storage.get("isAuthenticated"), None);
        assert!(matches!(
            storage.set("isAuthenticated", "true"),
            Err(AppError::Storage(_))
        ));
        storage.remove("isAuthenticated");
    }
}
