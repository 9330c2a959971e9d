// ============================================================================
// ALERTS - Alertas con pestañas y suscripciones
// ============================================================================

use std::collections::BTreeSet;

use yew::prelude::*;

use crate::components::Tabs;
use crate::data::alerts::{alerts, DEFAULT_SUBSCRIPTIONS};
use crate::hooks::use_toast;
use crate::models::{filter_alerts, toggle_subscription, AlertTab};
use crate::utils::format_timestamp;
use crate::utils::styles::severity_class;

#[function_component(AlertsPage)]
pub fn alerts_page() -> Html {
    let toast = use_toast();
    let all_alerts = use_memo((), |_| alerts());
    let tab = use_state(|| AlertTab::All);
    let subscribed = use_state(|| DEFAULT_SUBSCRIPTIONS.into_iter().collect::<BTreeSet<u32>>());

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected: AlertTab| tab.set(selected))
    };

    let on_toggle = {
        let subscribed = subscribed.clone();
        let all_alerts = all_alerts.clone();
        Callback::from(move |alert_id: u32| {
            let mut next = (*subscribed).clone();
            let now_subscribed = toggle_subscription(&mut next, alert_id);
            let title = all_alerts
                .iter()
                .find(|a| a.id == alert_id)
                .map(|a| a.title.clone())
                .unwrap_or_default();
            if now_subscribed {
                toast.notify("Subscribed", &format!("You will receive updates for {}", title));
            } else {
                toast.notify("Unsubscribed", &format!("You will no longer receive updates for {}", title));
            }
            subscribed.set(next);
        })
    };

    let visible = filter_alerts(&all_alerts, *tab, &subscribed);
    let tabs: Vec<(AlertTab, String)> = AlertTab::all()
        .into_iter()
        .map(|t| (t, t.label().to_string()))
        .collect();

    html! {
        <div class="page alerts">
            <h1>{"Emergency Alerts"}</h1>
            <p class="muted">{"Stay informed about emergencies and critical updates in your area."}</p>

            <Tabs<AlertTab> {tabs} active={*tab} on_select={on_tab} />

            if visible.is_empty() {
                <div class="empty-state card">
                    <h3>{"No alerts"}</h3>
                    <p class="muted">
                        { if *tab == AlertTab::Subscribed {
                            "You haven't subscribed to any alerts yet."
                        } else {
                            "There are no alerts to show right now."
                        } }
                    </p>
                </div>
            } else {
                <div class="stack">
                    { for visible.into_iter().map(|alert| {
                        let id = alert.id;
                        let is_subscribed = subscribed.contains(&id);
                        let on_toggle = on_toggle.clone();
                        html! {
                            <div key={id} class={classes!("card", "alert-card", (!alert.is_active).then_some("inactive"))}>
                                <div class="row-between">
                                    <div>
                                        <span class={classes!("badge", severity_class(alert.severity))}>
                                            { alert.severity.label() }
                                        </span>
                                        <span class="badge badge-outline">{ &alert.kind }</span>
                                        if !alert.is_active {
                                            <span class="badge badge-muted">{"Inactive"}</span>
                                        }
                                    </div>
                                    <button
                                        type="button"
                                        class={classes!("btn", if is_subscribed { "btn-outline" } else { "btn-primary" })}
                                        onclick={Callback::from(move |_| on_toggle.emit(id))}
                                    >
                                        { if is_subscribed { "🔕 Unsubscribe" } else { "🔔 Subscribe" } }
                                    </button>
                                </div>
                                <h3>{ &alert.title }</h3>
                                <p class="muted">{"📍 "}{ &alert.location }{" · 🕒 "}{ format_timestamp(&alert.timestamp) }</p>
                                <p>{ &alert.description }</p>
                                <div class="instructions">
                                    <strong>{"Instructions: "}</strong>
                                    { &alert.instructions }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
