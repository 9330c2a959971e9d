// ============================================================================
// DASHBOARD - Panel personal del usuario autenticado
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ProgressBar, Tabs};
use crate::data::dashboard::{
    checklist, nearby_resources, recent_activity, safety_status, user_alerts, volunteer_activities,
};
use crate::hooks::use_auth;
use crate::models::{ActivityCategory, ActivityTab, Tally};
use crate::router::Route;
use crate::utils::format_short_date;
use crate::utils::styles::{resource_status_class, user_alert_class};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let status = use_memo((), |_| safety_status());

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="page dashboard">
            <div class="row-between">
                <div>
                    <h1>{ format!("Welcome, {}", auth.session.display_name()) }</h1>
                    <p class="muted">{"Your personal disaster assistant is here..."}</p>
                </div>
                <button type="button" class="btn btn-outline" onclick={go(Route::Profile)}>
                    {"⚙️ Manage Profile"}
                </button>
            </div>

            <div class="grid grid-3">
                <div class="card">
                    <h3>{"Preparedness Status"}</h3>
                    <div class="preparedness">
                        <span class="big-number">{ format!("{}%", status.preparedness()) }</span>
                        <p class="muted small">{"Overall Preparedness"}</p>
                    </div>
                    <TallyRow label="Emergency Checklist" tally={status.checklist} />
                    <TallyRow label="Emergency Contacts" tally={status.contacts} />
                    <TallyRow label="Important Documents" tally={status.documents} />
                    <button type="button" class="btn btn-outline full" onclick={go(Route::Profile)}>
                        {"Complete Your Profile"}
                    </button>
                </div>

                <UserAlerts on_view_all={go(Route::Alerts)} />
                <NearbyResources on_view_all={go(Route::Shelters)} />
            </div>

            <div class="grid grid-2">
                <Checklist />
                <VolunteerActivities on_find_more={go(Route::Community)} />
            </div>

            <RecentActivity />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TallyRowProps {
    label: AttrValue,
    tally: Tally,
}

#[function_component(TallyRow)]
fn tally_row(props: &TallyRowProps) -> Html {
    html! {
        <div class="tally">
            <div class="row-between small">
                <span>{ &props.label }</span>
                <span class="muted">{ format!("{}/{}", props.tally.done, props.tally.total) }</span>
            </div>
            <ProgressBar percent={props.tally.percent()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ViewAllProps {
    on_view_all: Callback<MouseEvent>,
}

#[function_component(UserAlerts)]
fn user_alerts_card(props: &ViewAllProps) -> Html {
    let alerts = use_memo((), |_| user_alerts());

    html! {
        <div class="card">
            <h3>{"Your Alerts"}</h3>
            <div class="stack-sm">
                { for alerts.iter().map(|alert| html! {
                    <div key={alert.id} class="row">
                        <span class={classes!("icon-pill", user_alert_class(alert.severity))}>{ alert.kind.icon() }</span>
                        <div>
                            <h4>{ &alert.title }</h4>
                            <p class="muted small">{ &alert.description }</p>
                            <p class="muted small">{ format!("{} · {}", alert.location, alert.time) }</p>
                        </div>
                    </div>
                }) }
            </div>
            <button type="button" class="btn btn-outline full" onclick={props.on_view_all.clone()}>
                {"View All Alerts"}
            </button>
        </div>
    }
}

#[function_component(NearbyResources)]
fn nearby_resources_card(props: &ViewAllProps) -> Html {
    let resources = use_memo((), |_| nearby_resources());

    html! {
        <div class="card">
            <h3>{"Nearby Resources"}</h3>
            <div class="stack-sm">
                { for resources.iter().map(|resource| html! {
                    <div key={resource.id} class="resource">
                        <div class="row-between">
                            <span>{ format!("{} {}", resource.kind.icon(), resource.name) }</span>
                            <span class={classes!("badge", resource_status_class(resource.status))}>
                                { resource.status.label() }
                            </span>
                        </div>
                        <p class="muted small">{ format!("{} miles away", resource.distance) }</p>
                        if let Some(capacity) = resource.capacity {
                            <div class="row-between small">
                                <span>{"Capacity"}</span>
                                <span>{ format!("{}/{}", capacity.done, capacity.total) }</span>
                            </div>
                            <ProgressBar percent={capacity.percent()} />
                        }
                        if let Some(schedule) = &resource.schedule {
                            <p class="small">{ format!("Hours: {}", schedule) }</p>
                        }
                    </div>
                }) }
            </div>
            <button type="button" class="btn btn-outline full" onclick={props.on_view_all.clone()}>
                {"Find More Resources"}
            </button>
        </div>
    }
}

#[function_component(Checklist)]
fn checklist_card() -> Html {
    let items = use_memo((), |_| checklist());

    html! {
        <div class="card">
            <h3>{"Emergency Checklist"}</h3>
            <p class="muted small">{"Complete these items to prepare for emergencies"}</p>
            <ul class="stack-sm">
                { for items.iter().map(|item| {
                    let done = item.completed_on.is_some();
                    html! {
                        <li class={classes!("checklist-row", done.then_some("done"))}>
                            <span class="check">{ if done { "✅" } else { "⬜" } }</span>
                            <div>
                                <h4>{ &item.title }</h4>
                                <p class="muted small">
                                    { match &item.completed_on {
                                        Some(date) => format!("Completed on {}", date),
                                        None => "Not completed".to_string(),
                                    } }
                                </p>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VolunteerActivitiesProps {
    on_find_more: Callback<MouseEvent>,
}

#[function_component(VolunteerActivities)]
fn volunteer_activities_card(props: &VolunteerActivitiesProps) -> Html {
    let activities = use_memo((), |_| volunteer_activities());

    html! {
        <div class="card">
            <h3>{"Your Volunteer Activities"}</h3>
            <p class="muted small">{"Upcoming volunteer opportunities you've signed up for"}</p>
            if activities.is_empty() {
                <div class="empty">
                    <p>{"You haven't signed up for any volunteer activities yet."}</p>
                </div>
            } else {
                <div class="stack-sm">
                    { for activities.iter().map(|activity| html! {
                        <div key={activity.id} class="card inset">
                            <h4>{ &activity.title }</h4>
                            <p class="muted small">{ &activity.organization }</p>
                            <p class="small">{ format!("📅 {} · {}", format_short_date(&activity.date), activity.time) }</p>
                            <p class="small">{ format!("📍 {}", activity.location) }</p>
                        </div>
                    }) }
                </div>
            }
            <button type="button" class="btn btn-outline full" onclick={props.on_find_more.clone()}>
                {"Find More Opportunities"}
            </button>
        </div>
    }
}

fn activity_icon(category: ActivityCategory) -> &'static str {
    match category {
        ActivityCategory::Alerts => "⚠️",
        ActivityCategory::Donations => "❤️",
        ActivityCategory::Volunteer => "🤝",
        ActivityCategory::Checklist => "✅",
    }
}

#[function_component(RecentActivity)]
fn recent_activity_card() -> Html {
    let entries = use_memo((), |_| recent_activity());
    let tab = use_state(|| ActivityTab::All);

    let tabs: Vec<(ActivityTab, String)> = ActivityTab::all()
        .into_iter()
        .map(|t| (t, t.label().to_string()))
        .collect();
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected| tab.set(selected))
    };

    let visible: Vec<_> = entries.iter().filter(|e| tab.includes(e.category)).collect();

    html! {
        <div class="card">
            <h3>{"Recent Activity"}</h3>
            <Tabs<ActivityTab> {tabs} active={*tab} on_select={on_tab} />
            if visible.is_empty() {
                <p class="muted small">{"No recent activity."}</p>
            }
            <ul class="stack-sm">
                { for visible.into_iter().map(|entry| html! {
                    <li class="row">
                        <span class="icon-pill">{ activity_icon(entry.category) }</span>
                        <div>
                            <h4>{ &entry.title }</h4>
                            <p class="muted small">{ &entry.detail }</p>
                            <p class="muted small">{ &entry.when }</p>
                        </div>
                    </li>
                }) }
            </ul>
        </div>
    }
}
