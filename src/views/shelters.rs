// ============================================================================
// SHELTERS - Localizador de refugios con filtros
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ProgressBar, SearchInput, Tabs};
use crate::config::CONFIG;
use crate::data::shelters::shelters;
use crate::models::{ShelterFeature, ShelterFilters};
use crate::utils::styles::{occupancy_class, shelter_type_class};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShelterView {
    List,
    Map,
}

#[function_component(SheltersPage)]
pub fn shelters_page() -> Html {
    let limits = &CONFIG.shelter_config;
    let all_shelters = use_memo((), |_| shelters());
    let filters = use_state(|| ShelterFilters::new(limits.default_max_distance_miles as f64));
    let view = use_state(|| ShelterView::List);

    let on_search = {
        let filters = filters.clone();
        Callback::from(move |query: String| {
            let mut next = (*filters).clone();
            next.query = query;
            filters.set(next);
        })
    };

    let on_distance = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<f64>() {
                let mut next = (*filters).clone();
                next.max_distance = value;
                filters.set(next);
            }
        })
    };

    let on_feature = {
        let filters = filters.clone();
        Callback::from(move |feature: ShelterFeature| {
            let mut next = (*filters).clone();
            next.toggle(feature);
            filters.set(next);
        })
    };

    let on_view = {
        let view = view.clone();
        Callback::from(move |selected: ShelterView| view.set(selected))
    };

    let results = filters.apply(&all_shelters);
    let view_tabs = vec![
        (ShelterView::List, "List View".to_string()),
        (ShelterView::Map, "Map View".to_string()),
    ];

    html! {
        <div class="page shelters">
            <h1>{"Find Emergency Shelters"}</h1>
            <p class="muted">{"Locate nearby shelters, check availability, and get directions."}</p>

            <div class="layout-sidebar">
                <aside class="card filters">
                    <h3>{"Filters"}</h3>
                    <SearchInput
                        value={filters.query.clone()}
                        placeholder="Search by name, city, or address"
                        on_change={on_search}
                    />
                    <div class="form-group">
                        <label for="max-distance">
                            { format!("Maximum Distance: {} miles", filters.max_distance) }
                        </label>
                        <input
                            id="max-distance"
                            type="range"
                            min="0"
                            max={limits.max_distance_limit_miles.to_string()}
                            step={limits.distance_step_miles.to_string()}
                            value={filters.max_distance.to_string()}
                            oninput={on_distance}
                        />
                    </div>
                    <div class="stack-sm">
                        { for ShelterFeature::all().into_iter().map(|feature| {
                            let on_feature = on_feature.clone();
                            html! {
                                <label key={feature.id()} class="checkbox-row">
                                    <input
                                        type="checkbox"
                                        id={feature.id()}
                                        checked={filters.is_enabled(feature)}
                                        onchange={Callback::from(move |_: Event| on_feature.emit(feature))}
                                    />
                                    { feature.label() }
                                </label>
                            }
                        }) }
                    </div>
                </aside>

                <section class="results">
                    <Tabs<ShelterView> tabs={view_tabs} active={*view} on_select={on_view} />
                    {
                        match *view {
                            ShelterView::Map => html! {
                                <div class="card map-placeholder">
                                    <p>{"🗺️ Interactive map coming soon."}</p>
                                    <p class="muted">{ format!("{} shelters match your filters.", results.len()) }</p>
                                </div>
                            },
                            ShelterView::List if results.is_empty() => html! {
                                <div class="card empty-state">
                                    <h3>{"No shelters found"}</h3>
                                    <p class="muted">{"Try adjusting your filters or search terms."}</p>
                                </div>
                            },
                            ShelterView::List => html! {
                                <div class="stack">
                                    { for results.iter().map(|shelter| html! {
                                        <div key={shelter.id} class="card shelter-card">
                                            <div class="row-between">
                                                <h3>{ &shelter.name }</h3>
                                                <span class={classes!("badge", shelter_type_class(shelter.shelter_type))}>
                                                    { shelter.shelter_type.label() }
                                                </span>
                                            </div>
                                            <p class="muted">{"📍 "}{ shelter.full_address() }</p>
                                            <p class="muted">
                                                {"📞 "}{ &shelter.phone }
                                                {" · 🕒 "}{ &shelter.opening_hours }
                                                {" · "}{ format!("{:.1} miles away", shelter.distance) }
                                            </p>
                                            <div class="row-between small">
                                                <span>{ format!("Occupancy: {}/{}", shelter.occupancy, shelter.capacity) }</span>
                                                <span>{ format!("{} spots left", shelter.spots_left()) }</span>
                                            </div>
                                            <ProgressBar
                                                percent={shelter.occupancy_percent()}
                                                class={classes!(occupancy_class(shelter.capacity, shelter.occupancy))}
                                            />
                                            <div class="badges">
                                                { for shelter.feature_badges().into_iter().map(|badge| html! {
                                                    <span class="badge badge-outline">{ badge }</span>
                                                }) }
                                            </div>
                                            <p class="small muted">{"Amenities: "}{ shelter.amenities.join(", ") }</p>
                                        </div>
                                    }) }
                                </div>
                            },
                        }
                    }
                </section>
            </div>
        </div>
    }
}
