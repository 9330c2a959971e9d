// Decisiones de acceso encadenadas con el contexto de auth real

use disaster_haven::models::AuthPhase;
use disaster_haven::router::{access, Route, RouteAccess};
use disaster_haven::state::AuthContext;
use disaster_haven::stores::{KeyValueSessionStore, MemoryStorage};

fn context() -> AuthContext<KeyValueSessionStore<MemoryStorage>> {
    AuthContext::bootstrap(KeyValueSessionStore::new(MemoryStorage::new()))
}

#[test]
fn anonymous_visitor_is_sent_to_login() {
    let auth = context();
    assert_eq!(access(Route::Dashboard, auth.phase()), RouteAccess::RedirectToLogin);
    assert_eq!(access(Route::Admin, auth.phase()), RouteAccess::RedirectToLogin);
    assert_eq!(access(Route::Shelters, auth.phase()), RouteAccess::Allow);
}

#[test]
fn standard_user_is_kept_out_of_admin() {
    let auth = context();
    assert!(auth.login("user@example.com", "password"));
    assert_eq!(access(Route::Profile, auth.phase()), RouteAccess::Allow);
    assert_eq!(access(Route::Admin, auth.phase()), RouteAccess::DenyAdmin);
    assert_eq!(access(Route::Login, auth.phase()), RouteAccess::RedirectToDashboard);
}

#[test]
fn admin_reaches_every_page_and_loses_it_on_logout() {
    let auth = context();
    assert!(auth.login("admin@example.com", "admin"));
    for route in Route::navigation(auth.phase()) {
        assert_eq!(access(route, auth.phase()), RouteAccess::Allow, "{:?}", route);
    }

    auth.logout();
    assert_eq!(auth.phase(), AuthPhase::Anonymous);
    assert_eq!(access(Route::Admin, auth.phase()), RouteAccess::RedirectToLogin);
    assert_eq!(Route::navigation(auth.phase()).len(), 7);
}

#[test]
fn navigation_never_lists_a_blocked_route() {
    for phase in [
        AuthPhase::Anonymous,
        AuthPhase::AuthenticatedUser,
        AuthPhase::AuthenticatedAdmin,
    ] {
        for route in Route::navigation(phase) {
            assert_eq!(access(route, phase), RouteAccess::Allow);
        }
    }
}
