use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let route = use_route::<Route>();
    log::warn!("🧭 Ruta inexistente: {:?}", route);

    html! {
        <div class="page not-found center">
            <h1 class="big-number">{"404"}</h1>
            <p class="muted">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Return to Home"}</Link<Route>>
        </div>
    }
}
