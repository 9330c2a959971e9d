// ============================================================================
// APP - Raíz Yew: router + providers + layout
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Layout, RouteGuard};
use crate::hooks::{AuthProvider, ToastProvider};
use crate::router::{Requirement, Route};
use crate::views::{
    AdminPage, AlertsPage, AuthTab, CommunityPage, DashboardPage, DonationPage, HelpPage,
    HomePage, LoginPage, NotFoundPage, ProfilePage, RecoveryPage, SheltersPage,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </AuthProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn page(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Alerts => html! { <AlertsPage /> },
        Route::Shelters => html! { <SheltersPage /> },
        Route::Donation => html! { <DonationPage /> },
        Route::Recovery => html! { <RecoveryPage /> },
        Route::Community => html! { <CommunityPage /> },
        Route::Help => html! { <HelpPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Login => html! { <LoginPage initial_tab={AuthTab::Login} /> },
        Route::Signup => html! { <LoginPage initial_tab={AuthTab::Signup} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Las rutas públicas se pintan directamente; el resto pasa por `RouteGuard`
fn switch(route: Route) -> Html {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(&format!("{} | DisasterHaven", route.title()));
    }

    match route.requirement() {
        Requirement::Public => page(route),
        _ => html! {
            <RouteGuard {route}>
                { page(route) }
            </RouteGuard>
        },
    }
}
