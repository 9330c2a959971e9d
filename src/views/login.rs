// ============================================================================
// LOGIN VIEW - Acceso y registro en pestañas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{bind, Tabs, TextField};
use crate::error::AppError;
use crate::hooks::{use_auth, use_toast};
use crate::models::forms::{LoginForm, SignupForm};
use crate::router::Route;
use crate::utils::{DEMO_ADMIN_EMAIL, DEMO_USER_EMAIL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Signup,
}

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    #[prop_or(AuthTab::Login)]
    pub initial_tab: AuthTab,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let tab = use_state(|| props.initial_tab);

    let tabs = vec![
        (AuthTab::Login, "Login".to_string()),
        (AuthTab::Signup, "Sign Up".to_string()),
    ];
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected| tab.set(selected))
    };

    html! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1>{"🛡️ DisasterHaven"}</h1>
                <p class="muted">{"Sign in to access your dashboard and personalised alerts."}</p>
                <Tabs<AuthTab> {tabs} active={*tab} on_select={on_tab} />
                {
                    match *tab {
                        AuthTab::Login => html! { <LoginPanel /> },
                        AuthTab::Signup => html! { <SignupPanel /> },
                    }
                }
            </div>
        </div>
    }
}

#[function_component(LoginPanel)]
fn login_panel() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                toast.error("Login failed", &err);
                return;
            }
            if auth.login(form.email.trim(), &form.password) {
                toast.notify("Login successful", "Welcome back to DisasterHaven.");
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Dashboard);
                }
            } else {
                log::warn!("🔒 Login rechazado para {}", form.email);
                toast.error("Login failed", &AppError::InvalidCredentials);
            }
        })
    };

    html! {
        <form class="stack-sm" onsubmit={on_submit}>
            <TextField
                id="login-email"
                label="Email"
                input_type="email"
                value={form.email.clone()}
                placeholder="you@example.com"
                on_input={bind(&form, |f: &mut LoginForm, v| f.email = v)}
            />
            <TextField
                id="login-password"
                label="Password"
                input_type="password"
                value={form.password.clone()}
                on_input={bind(&form, |f: &mut LoginForm, v| f.password = v)}
            />
            <button type="submit" class="btn btn-primary full">{"Login"}</button>
            <p class="muted small">
                { format!("Demo accounts: {} / password, {} / admin", DEMO_USER_EMAIL, DEMO_ADMIN_EMAIL) }
            </p>
        </form>
    }
}

#[function_component(SignupPanel)]
fn signup_panel() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator();
    let form = use_state(SignupForm::default);

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                toast.error("Signup failed", &err);
                return;
            }
            if auth.signup(form.name.trim(), form.email.trim(), &form.password) {
                toast.notify("Account created", "Welcome to DisasterHaven!");
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Dashboard);
                }
            } else {
                toast.error("Signup failed", &AppError::validation("You are already logged in"));
            }
        })
    };

    html! {
        <form class="stack-sm" onsubmit={on_submit}>
            <TextField id="signup-name" label="Full Name" value={form.name.clone()}
                on_input={bind(&form, |f: &mut SignupForm, v| f.name = v)} />
            <TextField id="signup-email" label="Email" input_type="email" value={form.email.clone()}
                on_input={bind(&form, |f: &mut SignupForm, v| f.email = v)} />
            <TextField id="signup-password" label="Password" input_type="password" value={form.password.clone()}
                on_input={bind(&form, |f: &mut SignupForm, v| f.password = v)} />
            <TextField id="signup-confirm" label="Confirm Password" input_type="password"
                value={form.confirm_password.clone()}
                on_input={bind(&form, |f: &mut SignupForm, v| f.confirm_password = v)} />
            <button type="submit" class="btn btn-primary full">{"Create Account"}</button>
        </form>
    }
}
