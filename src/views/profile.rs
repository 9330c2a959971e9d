// ============================================================================
// PROFILE - Datos personales, notificaciones, documentos y seguridad
// ============================================================================
// Guardar el perfil pasa por `AuthHandle::update_profile`: el contexto de
// auth sigue siendo el único que escribe nombre y email cacheados.
// ============================================================================

use std::collections::HashSet;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{bind, Tabs, TextField, Toggle};
use crate::hooks::{use_auth, use_toast, AuthHandle, ToastHandle};
use crate::models::forms::{NotificationSetting, ProfileForm};
use crate::router::Route;
use crate::services::simulated_api;
use crate::utils::initials;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Profile,
    Notifications,
    Documents,
    Security,
}

impl ProfileTab {
    fn all() -> [ProfileTab; 4] {
        [ProfileTab::Profile, ProfileTab::Notifications, ProfileTab::Documents, ProfileTab::Security]
    }

    fn label(&self) -> &'static str {
        match self {
            ProfileTab::Profile => "👤 Profile",
            ProfileTab::Notifications => "🔔 Notifications",
            ProfileTab::Documents => "📤 Documents",
            ProfileTab::Security => "🔑 Security",
        }
    }
}

const COMPLETION: [(&str, &str); 5] = [
    ("Personal Info", "Complete"),
    ("Emergency Contacts", "Complete"),
    ("Notification Settings", "Complete"),
    ("Document Upload", "2/5"),
    ("Security Settings", "Incomplete"),
];

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();
    let tab = use_state(|| ProfileTab::Profile);
    let session = auth.session.clone();
    let profile = use_state(move || {
        ProfileForm::seeded(session.user_name.as_deref(), session.user_email.as_deref())
    });

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            auth.logout();
            toast.notify("Logged out", "You have been successfully logged out.");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let tabs: Vec<(ProfileTab, String)> = ProfileTab::all()
        .into_iter()
        .map(|t| (t, t.label().to_string()))
        .collect();
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected| tab.set(selected))
    };

    html! {
        <div class="page profile layout-sidebar">
            <aside class="stack">
                <div class="card center">
                    <div class="avatar avatar-lg">{ initials(&profile.name) }</div>
                    <h2>{ &profile.name }</h2>
                    <p class="muted small">{ &profile.email }</p>
                    <div class="badges">
                        <span class="badge outline">{"User"}</span>
                        <span class="badge outline">{"Volunteer"}</span>
                    </div>
                    <button type="button" class="btn btn-outline full" onclick={on_logout}>{"Log Out"}</button>
                </div>
                <div class="card">
                    <h3>{"Profile Completion"}</h3>
                    { for COMPLETION.iter().map(|(section, state)| html! {
                        <div class="row-between small">
                            <span>{ *section }</span>
                            <span class={classes!("badge", (*state != "Complete").then_some("outline"))}>{ *state }</span>
                        </div>
                    }) }
                </div>
            </aside>

            <div class="stack grow">
                <Tabs<ProfileTab> {tabs} active={*tab} on_select={on_tab} />
                {
                    match *tab {
                        ProfileTab::Profile => html! { <PersonalInfo profile={profile.clone()} /> },
                        ProfileTab::Notifications => html! { <NotificationPreferences /> },
                        ProfileTab::Documents => documents_tab(),
                        ProfileTab::Security => security_tab(),
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PersonalInfoProps {
    profile: UseStateHandle<ProfileForm>,
}

#[function_component(PersonalInfo)]
fn personal_info(props: &PersonalInfoProps) -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let editing = use_state(|| false);
    let saving = use_state(|| false);
    // Copia para "Cancel"
    let snapshot = use_state(|| (*props.profile).clone());
    let profile = props.profile.clone();

    let on_edit = {
        let editing = editing.clone();
        let snapshot = snapshot.clone();
        let profile = profile.clone();
        Callback::from(move |_| {
            snapshot.set((*profile).clone());
            editing.set(true);
        })
    };
    let on_cancel = {
        let editing = editing.clone();
        let profile = profile.clone();
        Callback::from(move |_| {
            profile.set((*snapshot).clone());
            editing.set(false);
        })
    };
    let on_save = {
        let profile = profile.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if let Err(err) = profile.validate() {
                toast.error("Error", &err);
                return;
            }
            saving.set(true);
            save_profile(
                (*profile).clone(),
                auth.clone(),
                toast.clone(),
                saving.clone(),
                editing.clone(),
            );
        })
    };

    let field = |id: &'static str, label: &'static str, value: &str, apply: fn(&mut ProfileForm, String)| {
        if *editing {
            html! {
                <TextField {id} {label} value={value.to_string()} on_input={bind(&profile, apply)} />
            }
        } else {
            html! {
                <div class="form-group">
                    <label>{ label }</label>
                    <div class="readonly">{ value.to_string() }</div>
                </div>
            }
        }
    };

    html! {
        <div class="card">
            <div class="row-between">
                <div>
                    <h2>{"Personal Information"}</h2>
                    <p class="muted small">{"Update your personal details and emergency contacts"}</p>
                </div>
                if *editing {
                    <div class="row">
                        <button type="button" class="btn btn-outline" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="button" class="btn btn-primary" onclick={on_save} disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save Changes" } }
                        </button>
                    </div>
                } else {
                    <button type="button" class="btn btn-outline" onclick={on_edit}>{"Edit Profile"}</button>
                }
            </div>

            <h3>{"Basic Information"}</h3>
            <div class="grid grid-2">
                { field("name", "Full Name", &profile.name, |f, v| f.name = v) }
                { field("email", "Email", &profile.email, |f, v| f.email = v) }
                { field("phone", "Phone Number", &profile.phone, |f, v| f.phone = v) }
            </div>

            <h3>{"Address"}</h3>
            <div class="grid grid-2">
                { field("address", "Street Address", &profile.address, |f, v| f.address = v) }
                { field("city", "City", &profile.city, |f, v| f.city = v) }
                { field("state", "State", &profile.state, |f, v| f.state = v) }
                { field("zipCode", "Zip Code", &profile.zip_code, |f, v| f.zip_code = v) }
            </div>

            <h3>{"Emergency Contacts"}</h3>
            <div class="card inset">
                <h4>{"Primary Emergency Contact"}</h4>
                <div class="grid grid-3">
                    { field("emergencyContact1Name", "Name", &profile.contacts[0].name, |f, v| f.contacts[0].name = v) }
                    { field("emergencyContact1Phone", "Phone Number", &profile.contacts[0].phone, |f, v| f.contacts[0].phone = v) }
                    { field("emergencyContact1Relation", "Relationship", &profile.contacts[0].relation, |f, v| f.contacts[0].relation = v) }
                </div>
            </div>
            <div class="card inset">
                <h4>{"Secondary Emergency Contact"}</h4>
                <div class="grid grid-3">
                    { field("emergencyContact2Name", "Name", &profile.contacts[1].name, |f, v| f.contacts[1].name = v) }
                    { field("emergencyContact2Phone", "Phone Number", &profile.contacts[1].phone, |f, v| f.contacts[1].phone = v) }
                    { field("emergencyContact2Relation", "Relationship", &profile.contacts[1].relation, |f, v| f.contacts[1].relation = v) }
                </div>
            </div>
        </div>
    }
}

fn save_profile(
    form: ProfileForm,
    auth: AuthHandle,
    toast: ToastHandle,
    saving: UseStateHandle<bool>,
    editing: UseStateHandle<bool>,
) {
    spawn_local(async move {
        simulated_api::save_profile("perfil").await;
        match auth.update_profile(&form.name, &form.email) {
            Ok(()) => toast.notify(
                "Profile updated",
                "Your profile information has been saved successfully.",
            ),
            Err(err) => {
                log::error!("❌ No se pudo guardar el perfil: {}", err);
                toast.error("Error", &err);
            }
        }
        saving.set(false);
        editing.set(false);
    });
}

#[function_component(NotificationPreferences)]
fn notification_preferences() -> Html {
    let toast = use_toast();
    let saving = use_state(|| false);
    let enabled = use_state(|| {
        NotificationSetting::channels()
            .into_iter()
            .chain(NotificationSetting::alert_types())
            .filter(|setting| setting.default_enabled())
            .collect::<HashSet<_>>()
    });

    let on_save = {
        let saving = saving.clone();
        Callback::from(move |_| {
            saving.set(true);
            let saving = saving.clone();
            let toast = toast.clone();
            spawn_local(async move {
                simulated_api::save_profile("preferencias").await;
                toast.notify(
                    "Notification settings updated",
                    "Your notification preferences have been saved.",
                );
                saving.set(false);
            });
        })
    };

    let toggle = |setting: NotificationSetting| {
        let id = format!("{:?}", setting);
        let on_toggle = {
            let enabled = enabled.clone();
            Callback::from(move |_| {
                let mut next = (*enabled).clone();
                if !next.remove(&setting) {
                    next.insert(setting);
                }
                enabled.set(next);
            })
        };
        html! {
            <Toggle {id} label={setting.label()} checked={enabled.contains(&setting)} {on_toggle} />
        }
    };

    let channels = NotificationSetting::channels();
    let (alert_channels, update_channels) = channels.split_at(3);

    html! {
        <div class="card">
            <div class="row-between">
                <div>
                    <h2>{"Notification Preferences"}</h2>
                    <p class="muted small">{"Choose how and when you receive notifications"}</p>
                </div>
                <button type="button" class="btn btn-primary" onclick={on_save} disabled={*saving}>
                    { if *saving { "Saving..." } else { "Save Preferences" } }
                </button>
            </div>
            <h3>{"Alert Notifications"}</h3>
            { for alert_channels.iter().copied().map(&toggle) }
            <h3>{"Updates & News"}</h3>
            { for update_channels.iter().copied().map(&toggle) }
            <h3>{"Alert Types"}</h3>
            { for NotificationSetting::alert_types().into_iter().map(&toggle) }
        </div>
    }
}

const UPLOADED_DOCUMENTS: [(&str, &str); 2] = [
    ("Insurance Policy.pdf", "Aug 15, 2023"),
    ("Medical Information.docx", "Sep 3, 2023"),
];

const RECOMMENDED_DOCUMENTS: [(&str, [&str; 4]); 3] = [
    ("Identification", ["Driver's License", "Passport", "Birth Certificate", "Social Security Card"]),
    ("Financial", ["Insurance Policies", "Property Deeds", "Tax Records", "Banking Information"]),
    ("Medical", ["Medical Insurance", "Immunization Records", "Prescription Information", "Medical History"]),
];

fn documents_tab() -> Html {
    html! {
        <div class="card">
            <h2>{"Important Documents"}</h2>
            <p class="muted small">{"Store and access your critical documents for emergency situations"}</p>
            <div class="row-between">
                <h3>{"Uploaded Documents"}</h3>
                <button type="button" class="btn btn-primary">{"📤 Upload New Document"}</button>
            </div>
            { for UPLOADED_DOCUMENTS.iter().map(|(name, date)| html! {
                <div class="row-between document">
                    <div>
                        <p>{ format!("📄 {}", name) }</p>
                        <p class="muted small">{ format!("Uploaded on {}", date) }</p>
                    </div>
                    <div class="row">
                        <button type="button" class="btn btn-outline btn-sm">{"View"}</button>
                        <button type="button" class="btn btn-ghost btn-sm">{"🗑️"}</button>
                    </div>
                </div>
            }) }
            <h3>{"Recommended Documents"}</h3>
            <p class="muted small">{"These documents will help you recover quickly after a disaster"}</p>
            <div class="grid grid-3">
                { for RECOMMENDED_DOCUMENTS.iter().map(|(group, items)| html! {
                    <div>
                        <h4>{ format!("✅ {}", group) }</h4>
                        <ul class="small">{ for items.iter().map(|item| html! { <li>{ *item }</li> }) }</ul>
                    </div>
                }) }
            </div>
            <p class="muted small">{"All documents are encrypted and securely stored."}</p>
        </div>
    }
}

fn security_tab() -> Html {
    html! {
        <div class="card">
            <h2>{"Security Settings"}</h2>
            <p class="muted small">{"Manage your account security and privacy settings"}</p>
            <h3>{"Password"}</h3>
            <div class="stack-sm">
                <div class="form-group">
                    <label for="currentPassword">{"Current Password"}</label>
                    <input id="currentPassword" type="password" />
                </div>
                <div class="form-group">
                    <label for="newPassword">{"New Password"}</label>
                    <input id="newPassword" type="password" />
                </div>
                <div class="form-group">
                    <label for="confirmPassword">{"Confirm New Password"}</label>
                    <input id="confirmPassword" type="password" />
                </div>
                <button type="button" class="btn btn-primary">{"Update Password"}</button>
            </div>
            <h3>{"Two-Factor Authentication"}</h3>
            <div class="toggle-row">
                <div>
                    <p>{"Two-Factor Authentication"}</p>
                    <p class="muted small">{"Add an extra layer of security to your account"}</p>
                </div>
                <input type="checkbox" />
            </div>
            <button type="button" class="btn btn-outline">{"Setup Two-Factor Authentication"}</button>
            <h3>{"Danger Zone"}</h3>
            <button type="button" class="btn btn-destructive">{"Delete Account"}</button>
        </div>
    }
}
