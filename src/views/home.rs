// ============================================================================
// HOME - Portada: hero, desastres recientes y servicios
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::home::{features, recent_disasters};
use crate::router::Route;
use crate::utils::styles::{disaster_severity_class, disaster_status_class};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let disasters = recent_disasters();
    let features = features();

    html! {
        <div class="page home">
            <section class="hero">
                <h1>{"Stay Safe. Stay Informed. Stay Connected."}</h1>
                <p class="lead">
                    {"Real-time disaster alerts, shelter information, and community support when you need it most."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Alerts} classes="btn btn-primary">{"View Active Alerts"}</Link<Route>>
                    <Link<Route> to={Route::Shelters} classes="btn btn-outline">{"Find Shelters"}</Link<Route>>
                </div>
            </section>

            <section class="section">
                <h2>{"Recent Disasters"}</h2>
                <div class="grid grid-3">
                    { for disasters.iter().map(|disaster| html! {
                        <div key={disaster.id} class="card">
                            <div class="card-header row-between">
                                <h3>{ &disaster.title }</h3>
                                <span class={classes!("badge", disaster_status_class(disaster.status))}>
                                    { disaster.status.label() }
                                </span>
                            </div>
                            <p class="muted">{"📍 "}{ &disaster.location }</p>
                            <p class="muted">{"📅 "}{ &disaster.date }</p>
                            <span class={classes!("badge", disaster_severity_class(disaster.severity))}>
                                { format!("{} Severity", disaster.severity.label()) }
                            </span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2>{"Our Services"}</h2>
                <div class="grid grid-3">
                    { for features.iter().map(|feature| {
                        let route = Route::recognize(&feature.path).unwrap_or(Route::Home);
                        html! {
                            <Link<Route> to={route} classes={classes!("card", "feature-card", feature.color_class.clone())}>
                                <div class="feature-icon">{ &feature.icon }</div>
                                <h3>{ &feature.title }</h3>
                                <p class="muted">{ &feature.description }</p>
                            </Link<Route>>
                        }
                    }) }
                </div>
            </section>

            <section class="cta card">
                <h2>{"Join Our Community"}</h2>
                <p>{"Sign up to receive personalized alerts, volunteer for relief efforts, and help your neighbours recover."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Signup} classes="btn btn-primary">{"Sign Up Now"}</Link<Route>>
                    <Link<Route> to={Route::Community} classes="btn btn-outline">{"Volunteer"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
