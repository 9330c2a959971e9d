use yew::prelude::*;
use yew_router::prelude::*;

use crate::error::AppError;
use crate::hooks::{use_auth, use_toast};
use crate::router::{access, Route, RouteAccess};

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub route: Route,
    pub children: Children,
}

/// Renderiza la página sólo si la sesión tiene acceso; si no, redirige
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let decision = access(props.route, auth.phase());

    {
        let route = props.route;
        use_effect_with(decision, move |decision| {
            match decision {
                RouteAccess::DenyAdmin => {
                    log::warn!("🚫 Acceso denegado a {:?}", route);
                    toast.error("Access Denied", &AppError::AccessDenied);
                }
                RouteAccess::RedirectToLogin => {
                    log::info!("🔒 {:?} requiere sesión, redirigiendo a login", route);
                }
                _ => {}
            }
            || ()
        });
    }

    match decision {
        RouteAccess::Allow => html! { <>{ props.children.clone() }</> },
        RouteAccess::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        RouteAccess::DenyAdmin | RouteAccess::RedirectToDashboard => {
            html! { <Redirect<Route> to={Route::Dashboard} /> }
        }
    }
}
