// ============================================================================
// DONATION - Donaciones económicas y en especie
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{bind, bind_toggle, ProgressBar, SelectField, Tabs, TextAreaField, TextField, Toggle};
use crate::data::donation::{campaigns, supply_needs};
use crate::hooks::{use_toast, ToastHandle};
use crate::models::forms::{AmountChoice, DonationForm, PaymentMethod, SupplyPickupForm, CAUSES, PRESET_AMOUNTS};
use crate::services::simulated_api;
use crate::utils::styles::priority_class;
use crate::utils::thousands;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DonationTab {
    Money,
    Supplies,
}

const ACCEPTED_ITEMS: [&str; 8] = [
    "Non-perishable food items",
    "Bottled water",
    "New clothing and blankets",
    "Personal hygiene products",
    "Baby supplies",
    "First aid supplies",
    "Cleaning supplies",
    "Batteries and flashlights",
];

const REJECTED_ITEMS: [&str; 6] = [
    "Used clothing in poor condition",
    "Expired food or medication",
    "Homemade food items",
    "Opened personal care items",
    "Hazardous materials",
    "Large furniture",
];

#[function_component(DonationPage)]
pub fn donation_page() -> Html {
    let tab = use_state(|| DonationTab::Money);
    let form = use_state(DonationForm::default);

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected: DonationTab| tab.set(selected))
    };

    // "Support This Cause": importe 50 y causa de la campaña, vuelve al formulario
    let on_support = {
        let form = form.clone();
        let tab = tab.clone();
        Callback::from(move |cause: String| {
            let mut next = (*form).clone();
            next.support_cause(cause);
            form.set(next);
            tab.set(DonationTab::Money);
        })
    };

    let tabs = vec![
        (DonationTab::Money, "Financial Donation".to_string()),
        (DonationTab::Supplies, "Supply Donation".to_string()),
    ];

    html! {
        <div class="page donation">
            <h1>{"❤️ Support Disaster Relief"}</h1>
            <p class="muted">{"Your generosity helps communities prepare for, respond to, and recover from disasters."}</p>

            <Tabs<DonationTab> {tabs} active={*tab} on_select={on_tab} />

            {
                match *tab {
                    DonationTab::Money => html! {
                        <div class="layout-split">
                            <FinancialDonation form={form.clone()} />
                            <Campaigns on_support={on_support} />
                        </div>
                    },
                    DonationTab::Supplies => html! {
                        <div class="layout-split">
                            <SupplyDonation />
                            <DonationGuidelines />
                        </div>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FinancialDonationProps {
    form: UseStateHandle<DonationForm>,
}

#[function_component(FinancialDonation)]
fn financial_donation(props: &FinancialDonationProps) -> Html {
    let toast = use_toast();
    let submitting = use_state(|| false);
    let form = props.form.clone();

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                toast.error("Error", &err);
                return;
            }
            submitting.set(true);
            submit_donation(form.clone(), submitting.clone(), toast.clone());
        })
    };

    let select_preset = |value: u32| {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.select_amount(AmountChoice::Preset(value));
            form.set(next);
        })
    };
    let select_custom = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.select_amount(AmountChoice::Custom);
            form.set(next);
        })
    };
    let select_payment = |method: PaymentMethod| {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.payment_method = method;
            form.set(next);
        })
    };

    let causes: Vec<(AttrValue, AttrValue)> = CAUSES
        .iter()
        .map(|(value, text)| (AttrValue::from(*value), AttrValue::from(*text)))
        .collect();

    html! {
        <form class="card" onsubmit={on_submit}>
            <h2>{"Make a Donation"}</h2>
            <p class="muted">{"Choose an amount and how you'd like to give."}</p>

            <div class="form-group">
                <label>{"Donation Amount"}</label>
                <div class="amount-grid">
                    { for PRESET_AMOUNTS.into_iter().map(|value| {
                        let selected = form.amount == AmountChoice::Preset(value);
                        html! {
                            <button
                                key={value}
                                type="button"
                                class={classes!("btn", if selected { "btn-primary" } else { "btn-outline" })}
                                onclick={select_preset(value)}
                            >
                                { format!("${}", value) }
                            </button>
                        }
                    }) }
                    <button
                        type="button"
                        class={classes!("btn", if form.amount == AmountChoice::Custom { "btn-primary" } else { "btn-outline" })}
                        onclick={select_custom}
                    >
                        {"Custom"}
                    </button>
                </div>
                if form.amount == AmountChoice::Custom {
                    <TextField
                        id="custom-amount"
                        label="Custom Amount ($)"
                        input_type="number"
                        value={form.custom_amount.clone()}
                        on_input={bind(&form, |f: &mut DonationForm, v| f.set_custom_amount(v))}
                        placeholder="Enter amount"
                    />
                }
            </div>

            <Toggle
                id="monthly"
                label="Make this a monthly donation"
                checked={form.monthly}
                on_toggle={bind_toggle(&form, |f: &mut DonationForm| f.monthly = !f.monthly)}
            />

            <SelectField
                id="cause"
                label="Support a Specific Cause"
                value={form.cause.clone()}
                options={causes}
                placeholder="Select a disaster relief fund"
                on_change={bind(&form, |f: &mut DonationForm, v| f.cause = v)}
            />

            <div class="grid grid-2">
                <TextField
                    id="name"
                    label="Name"
                    value={form.donor_name.clone()}
                    disabled={form.anonymous}
                    on_input={bind(&form, |f: &mut DonationForm, v| f.donor_name = v)}
                    placeholder="Your name"
                />
                <Toggle
                    id="anonymous"
                    label="Donate Anonymously"
                    checked={form.anonymous}
                    on_toggle={bind_toggle(&form, |f: &mut DonationForm| f.anonymous = !f.anonymous)}
                />
            </div>

            <TextField
                id="email"
                label="Email *"
                input_type="email"
                value={form.email.clone()}
                on_input={bind(&form, |f: &mut DonationForm, v| f.email = v)}
                placeholder="you@example.com"
            />
            <TextField
                id="phone"
                label="Phone Number (Optional)"
                input_type="tel"
                value={form.phone.clone()}
                on_input={bind(&form, |f: &mut DonationForm, v| f.phone = v)}
            />

            <div class="form-group">
                <label>{"Payment Method"}</label>
                { for [PaymentMethod::CreditCard, PaymentMethod::PayPal].into_iter().map(|method| html! {
                    <label key={method.value()} class="radio-row">
                        <input
                            type="radio"
                            name="payment"
                            id={method.value()}
                            checked={form.payment_method == method}
                            onchange={select_payment(method)}
                        />
                        { method.label() }
                    </label>
                }) }
            </div>

            <TextAreaField
                id="message"
                label="Message (Optional)"
                value={form.message.clone()}
                on_input={bind(&form, |f: &mut DonationForm, v| f.message = v)}
                placeholder="Leave a message of support"
                rows={3}
            />

            <button type="submit" class="btn btn-primary full" disabled={*submitting}>
                { if *submitting { "Processing..." } else { "Donate Now" } }
            </button>
        </form>
    }
}

fn submit_donation(
    form: UseStateHandle<DonationForm>,
    submitting: UseStateHandle<bool>,
    toast: ToastHandle,
) {
    spawn_local(async move {
        simulated_api::submit_form("donación").await;
        toast.notify(
            "Thank you for your donation!",
            "Your contribution will help those affected by disasters.",
        );
        form.set(DonationForm::default());
        submitting.set(false);
    });
}

#[derive(Properties, PartialEq)]
struct CampaignsProps {
    on_support: Callback<String>,
}

#[function_component(Campaigns)]
fn campaigns_panel(props: &CampaignsProps) -> Html {
    let campaigns = use_memo((), |_| campaigns());

    html! {
        <div class="card">
            <h2>{"🏆 Active Campaigns"}</h2>
            <div class="stack">
                { for campaigns.iter().map(|campaign| {
                    let cause = campaign.cause_key();
                    let on_support = props.on_support.clone();
                    html! {
                        <div key={campaign.id} class="campaign">
                            <h3>{ &campaign.title }</h3>
                            <p class="muted small">{ &campaign.description }</p>
                            <div class="row-between small">
                                <span>{ format!("${} raised", thousands(campaign.raised)) }</span>
                                <span>{ format!("${} goal", thousands(campaign.goal)) }</span>
                            </div>
                            <ProgressBar percent={campaign.progress_percent()} />
                            <div class="row-between small muted">
                                <span>{ format!("👥 {} donors", campaign.donors_count) }</span>
                                <span>{ format!("📅 {} days left", campaign.days_left) }</span>
                            </div>
                            <button
                                type="button"
                                class="btn btn-outline full"
                                onclick={Callback::from(move |_| on_support.emit(cause.clone()))}
                            >
                                {"Support This Cause"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(SupplyDonation)]
fn supply_donation() -> Html {
    let toast = use_toast();
    let needs = use_memo((), |_| supply_needs());
    let pickup = use_state(SupplyPickupForm::default);
    let submitting = use_state(|| false);

    let on_submit = {
        let pickup = pickup.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = pickup.validate() {
                toast.error("Error", &err);
                return;
            }
            submitting.set(true);
            let pickup = pickup.clone();
            let submitting = submitting.clone();
            let toast = toast.clone();
            spawn_local(async move {
                simulated_api::submit_form("recogida").await;
                toast.notify(
                    "Pickup scheduled!",
                    "We'll contact you to confirm the pickup time.",
                );
                pickup.set(SupplyPickupForm::default());
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="card">
            <h2>{"📦 Donate Supplies"}</h2>

            <h3>{"Current Supply Needs"}</h3>
            <div class="stack-sm">
                { for needs.iter().map(|need| html! {
                    <div key={need.id} class="supply-need">
                        <div class="row-between">
                            <span>{ &need.item }</span>
                            <span class={classes!("badge", priority_class(need.priority))}>
                                { need.priority.label() }
                            </span>
                        </div>
                        <ProgressBar percent={need.progress_percent()} />
                        <p class="small muted">{ format!("{} of {} received", need.received, need.needed) }</p>
                    </div>
                }) }
            </div>

            <h3>{"Drop-off Locations"}</h3>
            <div class="grid grid-2">
                <div class="card inset">
                    <h4>{"Central Relief Center"}</h4>
                    <p class="muted small">{"Abc Corporate Office, Kolkata"}</p>
                    <p class="small"><strong>{"Hours: "}</strong>{"9am-5pm, Mon-Sat"}</p>
                    <p class="small"><strong>{"Phone: "}</strong>{"9891580834"}</p>
                </div>
                <div class="card inset">
                    <h4>{"Eastside Community Hub"}</h4>
                    <p class="muted small">{"XYZ- Street, New Delhi-20"}</p>
                    <p class="small"><strong>{"Hours: "}</strong>{"10am-7pm, Mon-Fri"}</p>
                    <p class="small"><strong>{"Phone: "}</strong>{"9891580834"}</p>
                </div>
            </div>

            <h3>{"Schedule a Pickup"}</h3>
            <form class="stack-sm" onsubmit={on_submit}>
                <div class="grid grid-2">
                    <TextField id="pickup-name" label="Name" value={pickup.name.clone()}
                        on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.name = v)} />
                    <TextField id="pickup-email" label="Email" input_type="email" value={pickup.email.clone()}
                        on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.email = v)} />
                    <TextField id="pickup-phone" label="Phone Number" input_type="tel" value={pickup.phone.clone()}
                        on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.phone = v)} />
                    <TextField id="pickup-date" label="Pickup Date" input_type="date" value={pickup.pickup_date.clone()}
                        on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.pickup_date = v)} />
                </div>
                <TextField id="pickup-address" label="Address" value={pickup.address.clone()}
                    on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.address = v)} />
                <div class="grid grid-3">
                    <TextField id="pickup-city" label="City" value={pickup.city.clone()}
                        on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.city = v)} />
                    <TextField id="pickup-state" label="State" value={pickup.state.clone()}
                        on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.state = v)} />
                    <TextField id="pickup-zip" label="Zip Code" value={pickup.zip.clone()}
                        on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.zip = v)} />
                </div>
                <TextAreaField
                    id="pickup-items"
                    label="Items to Donate"
                    value={pickup.items.clone()}
                    placeholder="Please list the items you wish to donate and their approximate quantities"
                    on_input={bind(&pickup, |f: &mut SupplyPickupForm, v| f.items = v)}
                />
                <button type="submit" class="btn btn-primary full" disabled={*submitting}>
                    { if *submitting { "Scheduling..." } else { "🚚 Schedule Pickup" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(DonationGuidelines)]
fn donation_guidelines() -> Html {
    html! {
        <div class="stack">
            <div class="card">
                <h2>{"Donation Guidelines"}</h2>
                <h3>{"Acceptable Items"}</h3>
                <ul>{ for ACCEPTED_ITEMS.iter().map(|item| html! { <li>{ *item }</li> }) }</ul>
                <h3>{"We Cannot Accept"}</h3>
                <ul class="muted">{ for REJECTED_ITEMS.iter().map(|item| html! { <li>{ *item }</li> }) }</ul>
                <p class="small">
                    {"⚠️ All donations should be clean, in good condition, and ready for immediate distribution to those in need."}
                </p>
            </div>
            <div class="card">
                <h2>{"🎁 Your Impact"}</h2>
                <p class="small">{"Your donations directly help disaster survivors with:"}</p>
                <ol class="impact-list">
                    <li><strong>{"Emergency Shelter"}</strong><p class="small muted">{"Providing safe places for displaced families"}</p></li>
                    <li><strong>{"Food & Clean Water"}</strong><p class="small muted">{"Essential nutrition and hydration during emergencies"}</p></li>
                    <li><strong>{"Medical Assistance"}</strong><p class="small muted">{"Critical healthcare for the injured and vulnerable"}</p></li>
                    <li><strong>{"Recovery Support"}</strong><p class="small muted">{"Helping communities rebuild after the disaster"}</p></li>
                </ol>
            </div>
        </div>
    }
}
