// ============================================================================
// ADMIN - Panel de administración (solo rol admin)
// ============================================================================
// El acceso lo decide `RouteGuard`; aquí solo se pinta el panel.
// ============================================================================

use yew::prelude::*;

use crate::components::{bind, ProgressBar, SearchInput, SelectField, StatCard, Tabs, TextAreaField, TextField};
use crate::data::admin::{
    admin_activity, admin_alerts, admin_shelters, donation_breakdown, donation_records,
    service_statuses, stats, system_metrics, users,
};
use crate::data::donation::supply_needs;
use crate::hooks::use_toast;
use crate::models::forms::{NewAlertForm, ALERT_TYPES};
use crate::models::{
    filter_admin_alerts, filter_users, showing_summary, AdminTab, RecordStatus, ServiceState,
    Severity, ShelterStatus,
};
use crate::utils::styles::{
    record_status_class, role_class, severity_class, shelter_status_class, stock_status_class,
};
use crate::utils::{capitalize, format_short_date, format_timestamp};

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let tab = use_state(|| AdminTab::Dashboard);
    let creating_alert = use_state(|| false);

    let tabs: Vec<(AdminTab, String)> = AdminTab::all()
        .into_iter()
        .map(|t| (t, t.label().to_string()))
        .collect();
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected| tab.set(selected))
    };
    let go_to = {
        let tab = tab.clone();
        Callback::from(move |target: AdminTab| tab.set(target))
    };
    let on_new_alert = {
        let tab = tab.clone();
        let creating_alert = creating_alert.clone();
        Callback::from(move |_| {
            tab.set(AdminTab::Alerts);
            creating_alert.set(true);
        })
    };

    html! {
        <div class="page admin">
            <h1>{"🛠️ Admin Dashboard"}</h1>
            <p class="muted">{"Manage alerts, users, shelters and donations."}</p>

            <Tabs<AdminTab> {tabs} active={*tab} on_select={on_tab} />

            {
                match *tab {
                    AdminTab::Dashboard => html! { <Overview {go_to} {on_new_alert} /> },
                    AdminTab::Alerts => html! { <AlertsAdmin creating={creating_alert.clone()} /> },
                    AdminTab::Users => html! { <UsersAdmin /> },
                    AdminTab::Shelters => html! { <SheltersAdmin /> },
                    AdminTab::Donations => html! { <DonationsAdmin /> },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OverviewProps {
    go_to: Callback<AdminTab>,
    on_new_alert: Callback<MouseEvent>,
}

#[function_component(Overview)]
fn overview(props: &OverviewProps) -> Html {
    let stats = use_memo((), |_| stats());
    let activity = use_memo((), |_| admin_activity());
    let services = use_memo((), |_| service_statuses());
    let alerts = use_memo((), |_| admin_alerts());
    let users = use_memo((), |_| users());
    let shelters = use_memo((), |_| admin_shelters());

    let active_alerts = alerts.iter().filter(|a| a.status == RecordStatus::Active).count();
    let active_users = users.iter().filter(|u| u.status == RecordStatus::Active).count();
    let open_shelters = shelters.iter().filter(|s| s.status == ShelterStatus::Open).count();

    let go = |target: AdminTab| {
        let go_to = props.go_to.clone();
        Callback::from(move |_| go_to.emit(target))
    };

    html! {
        <div class="stack">
            <div class="grid grid-4">
                <StatCard value={stats.active_alerts.to_string()} label="Active Alerts" icon="🔔"
                    hint={format!("{} currently listed", active_alerts)} />
                <StatCard value={stats.registered_users.to_string()} label="Registered Users" icon="👥"
                    hint={format!("{} active accounts", active_users)} />
                <StatCard value={stats.active_shelters.to_string()} label="Active Shelters" icon="🏠"
                    hint={format!("{} open now", open_shelters)} />
                <StatCard value={stats.donations.clone()} label="Total Donations" icon="💰"
                    hint={format!("{} volunteers", stats.volunteers)} />
            </div>

            <div class="grid grid-2">
                <div class="card">
                    <h3>{"Recent Activity"}</h3>
                    <ul class="stack-sm">
                        { for activity.iter().map(|entry| html! {
                            <li>
                                <strong>{ &entry.title }</strong>
                                <p class="muted small">{ format!("{} · {}", entry.actor, format_timestamp(&entry.at)) }</p>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="card">
                    <h3>{"System Status"}</h3>
                    { for services.iter().map(|service| html! {
                        <div class="row-between small">
                            <span>{ &service.name }</span>
                            <span class={classes!("badge", match service.state {
                                ServiceState::Operational => "bg-success text-white",
                                ServiceState::Degraded => "bg-alert text-white",
                            })}>
                                { service.state.label() }
                            </span>
                        </div>
                    }) }
                    <h4>{"System Metrics"}</h4>
                    <div class="grid grid-2">
                        { for system_metrics().iter().map(|(label, value)| html! {
                            <div>
                                <p class="muted small">{ *label }</p>
                                <p class="strong">{ *value }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="card">
                <h3>{"Quick Actions"}</h3>
                <div class="grid grid-3">
                    <button type="button" class="btn btn-primary tall" onclick={props.on_new_alert.clone()}>
                        {"🔔 Create New Alert"}
                    </button>
                    <button type="button" class="btn btn-outline tall" onclick={go(AdminTab::Shelters)}>
                        {"🏠 Update Shelter Status"}
                    </button>
                    <button type="button" class="btn btn-outline tall" onclick={go(AdminTab::Users)}>
                        {"👥 Manage Users"}
                    </button>
                    <button type="button" class="btn btn-outline tall">{"📚 Recovery Resources"}</button>
                    <button type="button" class="btn btn-outline tall">{"📊 Export Reports"}</button>
                    <button type="button" class="btn btn-outline tall">{"⚙️ System Settings"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AlertsAdminProps {
    creating: UseStateHandle<bool>,
}

#[function_component(AlertsAdmin)]
fn alerts_admin(props: &AlertsAdminProps) -> Html {
    let toast = use_toast();
    let alerts = use_memo((), |_| admin_alerts());
    let query = use_state(String::new);
    let form = use_state(NewAlertForm::default);
    let creating = props.creating.clone();

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_open = {
        let creating = creating.clone();
        Callback::from(move |_| creating.set(true))
    };
    let on_cancel = {
        let creating = creating.clone();
        let form = form.clone();
        Callback::from(move |_| {
            form.set(NewAlertForm::default());
            creating.set(false);
        })
    };
    let on_create = {
        let creating = creating.clone();
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            if let Err(err) = form.validate() {
                toast.error("Error", &err);
                return;
            }
            log::info!("📣 Alerta creada: {}", form.title);
            toast.notify("Alert Created", "Your alert has been created and sent to recipients.");
            form.set(NewAlertForm::default());
            creating.set(false);
        })
    };

    let types: Vec<(AttrValue, AttrValue)> = ALERT_TYPES
        .iter()
        .map(|(value, text)| (AttrValue::from(*value), AttrValue::from(*text)))
        .collect();
    let severities: Vec<(AttrValue, AttrValue)> = Severity::all()
        .iter()
        .map(|s| (AttrValue::from(s.as_str()), AttrValue::from(s.label())))
        .collect();

    let visible = filter_admin_alerts(&alerts, &query);
    let summary = showing_summary(visible.len(), alerts.len(), "alerts");

    html! {
        <div class="card">
            <div class="row-between">
                <div>
                    <h2>{"Manage Alerts"}</h2>
                    <p class="muted small">{"Create, edit and monitor emergency alerts"}</p>
                </div>
                <div class="row">
                    <SearchInput value={(*query).clone()} placeholder="Search alerts..." on_change={on_search} />
                    <button type="button" class="btn btn-primary" onclick={on_open}>{"＋ Create Alert"}</button>
                </div>
            </div>

            if *creating {
                <div class="card inset stack-sm">
                    <h3>{"Create New Alert"}</h3>
                    <div class="grid grid-2">
                        <TextField id="alert-title" label="Alert Title" value={form.title.clone()}
                            placeholder="Enter alert title"
                            on_input={bind(&form, |f: &mut NewAlertForm, v| f.title = v)} />
                        <SelectField id="alert-type" label="Alert Type" value={form.kind.clone()}
                            options={types} placeholder="Select type"
                            on_change={bind(&form, |f: &mut NewAlertForm, v| f.kind = v)} />
                        <SelectField id="alert-severity" label="Severity" value={form.severity.clone()}
                            options={severities} placeholder="Select severity"
                            on_change={bind(&form, |f: &mut NewAlertForm, v| f.severity = v)} />
                        <TextField id="alert-location" label="Location" value={form.location.clone()}
                            placeholder="Enter affected location"
                            on_input={bind(&form, |f: &mut NewAlertForm, v| f.location = v)} />
                    </div>
                    <TextAreaField id="alert-description" label="Alert Description" value={form.description.clone()}
                        placeholder="Enter detailed alert information"
                        on_input={bind(&form, |f: &mut NewAlertForm, v| f.description = v)} />
                    <TextAreaField id="alert-instructions" label="Instructions" value={form.instructions.clone()}
                        placeholder="Enter instructions for recipients"
                        on_input={bind(&form, |f: &mut NewAlertForm, v| f.instructions = v)} />
                    <div class="row end">
                        <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="button" class="btn btn-primary" onclick={on_create}>{"Create & Send Alert"}</button>
                    </div>
                </div>
            }

            <table class="table">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Type"}</th>
                        <th>{"Location"}</th>
                        <th>{"Severity"}</th>
                        <th>{"Status"}</th>
                        <th>{"Created"}</th>
                        <th>{"Recipients"}</th>
                        <th class="right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.into_iter().map(|alert| {
                        let toast = toast.clone();
                        let on_delete = Callback::from(move |_| {
                            toast.notify("Alert Deleted", "The alert has been deleted successfully.");
                        });
                        html! {
                            <tr key={alert.id}>
                                <td class="strong">{ &alert.title }</td>
                                <td>{ capitalize(&alert.kind) }</td>
                                <td>{ &alert.location }</td>
                                <td>
                                    <span class={classes!("badge", severity_class(alert.severity))}>
                                        { alert.severity.label() }
                                    </span>
                                </td>
                                <td>
                                    <span class={classes!("badge", record_status_class(alert.status))}>
                                        { alert.status.label() }
                                    </span>
                                </td>
                                <td>{ format_timestamp(&alert.created) }</td>
                                <td>{ alert.recipients.to_string() }</td>
                                <td class="right">
                                    <button type="button" class="btn btn-ghost btn-sm">{"✏️"}</button>
                                    <button type="button" class="btn btn-ghost btn-sm" onclick={on_delete}>{"🗑️"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            <p class="muted small">{ summary }</p>
        </div>
    }
}

#[function_component(UsersAdmin)]
fn users_admin() -> Html {
    let users = use_memo((), |_| users());
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let visible = filter_users(&users, &query);
    let summary = showing_summary(visible.len(), users.len(), "users");

    html! {
        <div class="card">
            <div class="row-between">
                <div>
                    <h2>{"Manage Users"}</h2>
                    <p class="muted small">{"View and manage registered accounts"}</p>
                </div>
                <SearchInput value={(*query).clone()} placeholder="Search users..." on_change={on_search} />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Role"}</th>
                        <th>{"Status"}</th>
                        <th>{"Location"}</th>
                        <th>{"Last Active"}</th>
                        <th>{"Joined"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.into_iter().map(|user| html! {
                        <tr key={user.id}>
                            <td class="strong">{ &user.name }</td>
                            <td>{ &user.email }</td>
                            <td><span class={classes!("badge", role_class(user.role))}>{ user.role.label() }</span></td>
                            <td><span class={classes!("badge", record_status_class(user.status))}>{ user.status.label() }</span></td>
                            <td>{ &user.location }</td>
                            <td>{ format_timestamp(&user.last_active) }</td>
                            <td>{ format_short_date(&user.join_date) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            <p class="muted small">{ summary }</p>
        </div>
    }
}

#[function_component(SheltersAdmin)]
fn shelters_admin() -> Html {
    let shelters = use_memo((), |_| admin_shelters());

    html! {
        <div class="card">
            <div class="row-between">
                <div>
                    <h2>{"Manage Shelters"}</h2>
                    <p class="muted small">{"Monitor capacity and status of emergency shelters"}</p>
                </div>
                <button type="button" class="btn btn-primary">{"＋ Add Shelter"}</button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Address"}</th>
                        <th>{"Occupancy"}</th>
                        <th>{"Status"}</th>
                        <th>{"Last Updated"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for shelters.iter().map(|shelter| {
                        let percent = shelter.occupancy_percent();
                        html! {
                            <tr key={shelter.id}>
                                <td class="strong">{ &shelter.name }</td>
                                <td>{ &shelter.address }</td>
                                <td>
                                    <div class="small">
                                        { format!("{}/{} ({}%)", shelter.occupancy, shelter.capacity, percent.round()) }
                                    </div>
                                    <ProgressBar {percent} />
                                </td>
                                <td>
                                    <span class={classes!("badge", shelter_status_class(shelter.status))}>
                                        { shelter.status.label() }
                                    </span>
                                </td>
                                <td>{ format_timestamp(&shelter.last_updated) }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            <p class="muted small">{ showing_summary(shelters.len(), shelters.len(), "shelters") }</p>
        </div>
    }
}

#[function_component(DonationsAdmin)]
fn donations_admin() -> Html {
    let needs = use_memo((), |_| supply_needs());
    let records = use_memo((), |_| donation_records());

    html! {
        <div class="stack">
            <div class="grid grid-2">
                <div class="card">
                    <h3>{"Donations by Campaign"}</h3>
                    { for donation_breakdown().iter().map(|(campaign, amount, share)| html! {
                        <div class="stack-xs">
                            <div class="row-between small">
                                <span>{ *campaign }</span>
                                <span>{ *amount }</span>
                            </div>
                            <ProgressBar percent={*share as f64} />
                        </div>
                    }) }
                </div>
                <div class="card">
                    <h3>{"Supply Inventory"}</h3>
                    { for needs.iter().map(|need| {
                        let status = need.stock_status();
                        html! {
                            <div key={need.id} class="row-between small">
                                <span>{ &need.item }</span>
                                <span class="muted">{ format!("{}/{}", need.received, need.needed) }</span>
                                <span class={classes!("badge", stock_status_class(status))}>{ status.label() }</span>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <div class="card">
                <h3>{"Recent Donations"}</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Donor"}</th>
                            <th>{"Type"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Campaign"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for records.iter().map(|record| html! {
                            <tr>
                                <td>{ format_timestamp(&record.date) }</td>
                                <td>{ &record.donor }</td>
                                <td>{ record.kind.label() }</td>
                                <td>{ &record.amount }</td>
                                <td>{ &record.campaign }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
