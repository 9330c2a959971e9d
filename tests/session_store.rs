use disaster_haven::models::{Role, Session};
use disaster_haven::stores::{
    BrowserSessionStore, KeyValueSessionStore, KeyValueStorage, MemoryStorage, SessionStore,
};

fn store() -> (KeyValueSessionStore<MemoryStorage>, MemoryStorage) {
    let backend = MemoryStorage::new();
    (KeyValueSessionStore::new(backend.clone()), backend)
}

#[test]
fn write_then_read_round_trips() {
    let sessions = [
        Session::anonymous(),
        Session::authenticated(Role::User, None, None),
        Session::authenticated(Role::Admin, Some("Root".into()), None),
        Session::authenticated(Role::User, Some("Jane".into()), Some("jane@x.com".into())),
    ];
    for session in sessions {
        let (store, _) = store();
        store.write(&session);
        assert_eq!(store.read(), session);
    }
}

#[test]
fn flags_are_plain_strings() {
    let (store, backend) = store();
    store.write(&Session::authenticated(Role::Admin, None, Some("a@b.c".into())));
    assert_eq!(backend.get("isAuthenticated").as_deref(), Some("true"));
    assert_eq!(backend.get("isAdmin").as_deref(), Some("true"));
    assert_eq!(backend.get("userEmail").as_deref(), Some("a@b.c"));
    assert_eq!(backend.get("userName"), None);
}

#[test]
fn malformed_flags_read_as_unset() {
    let backend = MemoryStorage::with_entries([("isAuthenticated", "yes"), ("isAdmin", "1")]);
    let store = KeyValueSessionStore::new(backend);
    assert_eq!(store.read(), Session::default());
}

#[test]
fn admin_flag_without_auth_is_dropped() {
    let backend = MemoryStorage::with_entries([("isAdmin", "true")]);
    let session = KeyValueSessionStore::new(backend).read();
    assert!(!session.is_admin);
    assert!(!session.authenticated);
}

#[test]
fn clear_removes_only_session_keys() {
    let backend = MemoryStorage::with_entries([("theme", "dark")]);
    let store = KeyValueSessionStore::new(backend.clone());
    store.write(&Session::authenticated(Role::User, Some("Jane".into()), Some("j@x.com".into())));
    assert_eq!(backend.len(), 5);

    store.clear();
    assert_eq!(backend.len(), 1);
    assert_eq!(backend.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.read(), Session::default());
}

#[test]
fn browser_store_without_local_storage_reads_anonymous() {
    let store = BrowserSessionStore::default();
    assert_eq!(store.read(), Session::anonymous());
    store.write(&Session::authenticated(Role::Admin, Some("Root".into()), None));
    assert_eq!(store.read(), Session::anonymous());
    store.clear();
    assert_eq!(store.read(), Session::anonymous());
}
