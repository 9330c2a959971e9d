// Recorridos completos del contexto de auth sobre almacenamiento en memoria

use std::cell::RefCell;
use std::rc::Rc;

use disaster_haven::error::AppError;
use disaster_haven::models::{AuthPhase, Session};
use disaster_haven::state::AuthContext;
use disaster_haven::stores::{
    BrowserSessionStore, KeyValueSessionStore, KeyValueStorage, MemoryStorage, SessionStore,
};

type MemoryStore = KeyValueSessionStore<MemoryStorage>;

fn fresh() -> (AuthContext<MemoryStore>, MemoryStorage) {
    let backend = MemoryStorage::new();
    let context = AuthContext::bootstrap(KeyValueSessionStore::new(backend.clone()));
    (context, backend)
}

fn reread(backend: &MemoryStorage) -> Session {
    KeyValueSessionStore::new(backend.clone()).read()
}

#[test]
fn fresh_load_is_anonymous() {
    let (context, backend) = fresh();
    assert_eq!(context.phase(), AuthPhase::Anonymous);
    let stored = reread(&backend);
    assert!(!stored.authenticated);
    assert!(!stored.is_admin);
    assert!(backend.is_empty());
}

#[test]
fn admin_login_persists_admin_session() {
    let (context, backend) = fresh();
    assert!(context.login("admin@example.com", "admin"));
    let stored = reread(&backend);
    assert!(stored.authenticated);
    assert!(stored.is_admin);
    assert_eq!(context.phase(), AuthPhase::AuthenticatedAdmin);
}

#[test]
fn standard_login_is_not_admin() {
    let (context, backend) = fresh();
    assert!(context.login("user@example.com", "password"));
    let stored = reread(&backend);
    assert!(stored.authenticated);
    assert!(!stored.is_admin);
    assert_eq!(backend.get("isAdmin").as_deref(), Some("false"));
}

#[test]
fn wrong_credentials_leave_session_untouched() {
    let (context, backend) = fresh();
    let before = context.session();
    for (identifier, secret) in [
        ("wrong@x.com", "bad"),
        ("admin@example.com", "password"),
        ("user@example.com", "admin"),
        ("USER@example.com", "password"),
        ("", ""),
    ] {
        assert!(!context.login(identifier, secret), "{} aceptado", identifier);
        assert_eq!(context.session(), before);
    }
    assert!(backend.is_empty());
}

#[test]
fn signup_then_logout_clears_everything() {
    let (context, backend) = fresh();
    assert!(context.signup("Jane", "jane@x.com", "pw"));

    let stored = reread(&backend);
    assert!(stored.authenticated);
    assert!(!stored.is_admin);
    assert_eq!(stored.user_name.as_deref(), Some("Jane"));
    assert_eq!(stored.user_email.as_deref(), Some("jane@x.com"));

    context.logout();
    assert_eq!(reread(&backend), Session::default());
    assert_eq!(context.session(), Session::default());
    assert!(backend.is_empty());
}

#[test]
fn logout_twice_equals_once() {
    let (context, backend) = fresh();
    assert!(context.login("admin@example.com", "admin"));
    context.logout();
    let once = (context.session(), reread(&backend));
    context.logout();
    assert_eq!((context.session(), reread(&backend)), once);
}

#[test]
fn logout_from_anonymous_is_harmless() {
    let (context, backend) = fresh();
    context.logout();
    assert_eq!(context.phase(), AuthPhase::Anonymous);
    assert!(backend.is_empty());
}

#[test]
fn bootstrap_restores_persisted_session() {
    let backend = MemoryStorage::with_entries([
        ("isAuthenticated", "true"),
        ("isAdmin", "true"),
        ("userName", "Ana"),
    ]);
    let context = AuthContext::bootstrap(KeyValueSessionStore::new(backend));
    assert_eq!(context.phase(), AuthPhase::AuthenticatedAdmin);
    assert_eq!(context.session().display_name(), "Ana");
}

#[test]
fn bootstrap_reads_storage_only_once() {
    let (context, backend) = fresh();
    // Cambios externos tras el arranque no se ven
    backend.set("isAuthenticated", "true").unwrap();
    assert_eq!(context.phase(), AuthPhase::Anonymous);
}

#[test]
fn authenticated_session_rejects_new_login_or_signup() {
    let (context, _backend) = fresh();
    assert!(context.signup("Jane", "jane@x.com", "pw"));
    let before = context.session();
    assert!(!context.login("admin@example.com", "admin"));
    assert!(!context.signup("Bob", "bob@x.com", "pw"));
    assert_eq!(context.session(), before);
}

#[test]
fn update_profile_requires_session() {
    let (context, backend) = fresh();
    assert_eq!(
        context.update_profile("Jane", "jane@x.com"),
        Err(AppError::NotAuthenticated)
    );

    assert!(context.login("user@example.com", "password"));
    context.update_profile("Jane Roe", "jane@roe.com").unwrap();
    let stored = reread(&backend);
    assert_eq!(stored.user_name.as_deref(), Some("Jane Roe"));
    assert_eq!(stored.user_email.as_deref(), Some("jane@roe.com"));
    assert!(stored.authenticated);
}

#[test]
fn subscribers_see_each_transition_once() {
    let (context, _backend) = fresh();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let id = {
        let seen = seen.clone();
        context.subscribe(move |session| seen.borrow_mut().push(session.phase()))
    };

    assert!(context.login("admin@example.com", "admin"));
    assert!(!context.login("admin@example.com", "admin"));
    context.logout();
    assert_eq!(
        *seen.borrow(),
        vec![AuthPhase::AuthenticatedAdmin, AuthPhase::Anonymous]
    );

    assert!(context.unsubscribe(id));
    assert!(context.signup("Jane", "jane@x.com", "pw"));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn auth_works_in_memory_when_local_storage_is_missing() {
    let auth = AuthContext::bootstrap(BrowserSessionStore::default());
    assert_eq!(auth.phase(), AuthPhase::Anonymous);

    assert!(auth.login("admin@example.com", "admin"));
    assert_eq!(auth.phase(), AuthPhase::AuthenticatedAdmin);

    auth.logout();
    assert_eq!(auth.session(), Session::anonymous());
}
