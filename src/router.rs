// ============================================================================
// ROUTER - Rutas de la SPA y reglas de acceso
// ============================================================================
// `access` es una función pura sobre (ruta, fase); el componente `RouteGuard`
// sólo ejecuta la decisión (redirección + toast).
// ============================================================================

use yew_router::prelude::*;

use crate::models::AuthPhase;

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/alerts")]
    Alerts,
    #[at("/shelters")]
    Shelters,
    #[at("/donation")]
    Donation,
    #[at("/recovery")]
    Recovery,
    #[at("/community")]
    Community,
    #[at("/help")]
    Help,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[at("/admin")]
    Admin,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Nivel de acceso que exige cada ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Public,
    /// Sólo sin sesión (login / signup)
    GuestOnly,
    Authenticated,
    Admin,
}

/// Resultado de evaluar una ruta contra la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    RedirectToLogin,
    /// Sesión sin permisos de admin: aviso "Access Denied" y al dashboard
    DenyAdmin,
    /// Ya hay sesión: fuera de login/signup
    RedirectToDashboard,
}

impl Route {
    pub fn requirement(&self) -> Requirement {
        match self {
            Route::Dashboard | Route::Profile => Requirement::Authenticated,
            Route::Admin => Requirement::Admin,
            Route::Login | Route::Signup => Requirement::GuestOnly,
            _ => Requirement::Public,
        }
    }

    /// Título de la entrada de navegación
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Alerts => "Alerts",
            Route::Shelters => "Shelters",
            Route::Donation => "Donation",
            Route::Recovery => "Recovery",
            Route::Community => "Community",
            Route::Help => "Help",
            Route::Dashboard => "Dashboard",
            Route::Profile => "Profile",
            Route::Admin => "Admin",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::NotFound => "Not Found",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Home => "🏠",
            Route::Alerts => "🔔",
            Route::Shelters => "📍",
            Route::Donation => "❤️",
            Route::Recovery => "🛡️",
            Route::Community => "👥",
            Route::Help => "❓",
            Route::Dashboard => "📊",
            Route::Profile => "👤",
            Route::Admin => "⚙️",
            Route::Login | Route::Signup => "🔑",
            Route::NotFound => "",
        }
    }

    /// Entradas de navegación visibles para la fase dada, en orden
    pub fn navigation(phase: AuthPhase) -> Vec<Route> {
        let mut items = vec![
            Route::Home,
            Route::Alerts,
            Route::Shelters,
            Route::Donation,
            Route::Recovery,
            Route::Community,
            Route::Help,
        ];
        if phase != AuthPhase::Anonymous {
            items.extend([Route::Dashboard, Route::Profile]);
        }
        if phase == AuthPhase::AuthenticatedAdmin {
            items.push(Route::Admin);
        }
        items
    }
}

pub fn access(route: Route, phase: AuthPhase) -> RouteAccess {
    match (route.requirement(), phase) {
        (Requirement::Public, _) => RouteAccess::Allow,
        (Requirement::GuestOnly, AuthPhase::Anonymous) => RouteAccess::Allow,
        (Requirement::GuestOnly, _) => RouteAccess::RedirectToDashboard,
        (_, AuthPhase::Anonymous) => RouteAccess::RedirectToLogin,
        (Requirement::Authenticated, _) => RouteAccess::Allow,
        (Requirement::Admin, AuthPhase::AuthenticatedAdmin) => RouteAccess::Allow,
        (Requirement::Admin, AuthPhase::AuthenticatedUser) => RouteAccess::DenyAdmin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_are_open_to_everyone() {
        for phase in [
            AuthPhase::Anonymous,
            AuthPhase::AuthenticatedUser,
            AuthPhase::AuthenticatedAdmin,
        ] {
            for route in [Route::Home, Route::Alerts, Route::Help, Route::NotFound] {
                assert_eq!(access(route, phase), RouteAccess::Allow);
            }
        }
    }

    #[test]
    fn gated_routes_send_anonymous_to_login() {
        for route in [Route::Dashboard, Route::Profile, Route::Admin] {
            assert_eq!(access(route, AuthPhase::Anonymous), RouteAccess::RedirectToLogin);
        }
    }

    #[test]
    fn admin_route_denies_standard_users() {
        assert_eq!(access(Route::Admin, AuthPhase::AuthenticatedUser), RouteAccess::DenyAdmin);
        assert_eq!(access(Route::Admin, AuthPhase::AuthenticatedAdmin), RouteAccess::Allow);
        assert_eq!(access(Route::Profile, AuthPhase::AuthenticatedUser), RouteAccess::Allow);
    }

    #[test]
    fn login_is_guest_only() {
        assert_eq!(access(Route::Login, AuthPhase::Anonymous), RouteAccess::Allow);
        assert_eq!(
            access(Route::Signup, AuthPhase::AuthenticatedAdmin),
            RouteAccess::RedirectToDashboard
        );
    }

    #[test]
    fn navigation_grows_with_privileges() {
        assert_eq!(Route::navigation(AuthPhase::Anonymous).len(), 7);
        assert_eq!(Route::navigation(AuthPhase::AuthenticatedUser).len(), 9);
        assert_eq!(
            Route::navigation(AuthPhase::AuthenticatedAdmin).last(),
            Some(&Route::Admin)
        );
    }

    #[test]
    fn paths_match_route_table() {
        assert_eq!(Route::Donation.to_path(), "/donation");
        assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
    }
}
