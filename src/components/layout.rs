// ============================================================================
// LAYOUT - Shell con sidebar, contenido y pie
// ============================================================================
// Las entradas de navegación dependen de la fase de la sesión; el botón de
// logout vacía la sesión, avisa con un toast y vuelve a la portada.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_auth, use_toast};
use crate::models::AuthPhase;
use crate::router::Route;
use crate::utils::FOOTER_TEXT;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    html! {
        <div class="app-shell">
            <button type="button" class="menu-toggle" onclick={toggle_menu}>
                { if *menu_open { "✕" } else { "☰" } }
            </button>
            <Sidebar open={*menu_open} on_navigate={close_menu} />
            <div class="main-column">
                <main class="main-content">
                    { props.children.clone() }
                </main>
                <footer class="footer">
                    <p>{ FOOTER_TEXT }</p>
                </footer>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    open: bool,
    on_navigate: Callback<()>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();
    let current = use_route::<Route>().unwrap_or(Route::Home);

    let on_logout = {
        let auth = auth.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            auth.logout();
            toast.notify("Logged out", "You have been successfully logged out.");
            on_navigate.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let nav_link = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        let active = route == current;
        html! {
            <li key={route.to_path()} onclick={Callback::from(move |_| on_navigate.emit(()))}>
                <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                    <span class="nav-icon">{ route.icon() }</span>
                    { route.title() }
                </Link<Route>>
            </li>
        }
    };

    let items = Route::navigation(auth.phase());
    let public_count = Route::navigation(AuthPhase::Anonymous).len();
    let (public, private) = items.split_at(public_count.min(items.len()));

    html! {
        <aside class={classes!("sidebar", props.open.then_some("open"))}>
            <Link<Route> to={Route::Home} classes="nav-brand">
                <span class="brand-icon">{"⚠️"}</span>
                { &CONFIG.app_name }
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    { for public.iter().copied().map(&nav_link) }
                </ul>
                if !private.is_empty() {
                    <hr class="nav-divider" />
                    <ul class="nav-links">
                        { for private.iter().copied().map(&nav_link) }
                    </ul>
                }
            </nav>
            <div class="sidebar-footer">
                if auth.is_authenticated() {
                    <button type="button" class="btn btn-outline full" onclick={on_logout}>
                        {"↩ Logout"}
                    </button>
                } else {
                    <Link<Route> to={Route::Login} classes="btn btn-primary full">
                        {"Login"}
                    </Link<Route>>
                }
            </div>
        </aside>
    }
}
