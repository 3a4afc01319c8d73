//! Email + password login form gated by the bot challenge.
//!
//! The form state lives in a `RwSignal<LoginFlow>`; see `state::login` for the
//! transitions. Outcomes come back as `UiEffect`s and are applied through the
//! effect queue, which owns the router and the widget handle.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::recaptcha::{Recaptcha, RecaptchaHandle};
use crate::config::PublicConfig;
use crate::net::api::HttpAuthGateway;
use crate::state::login::{LoginFlow, submit_login, verify_challenge};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::effects::{BrowserEffects, install_effect_queue};
use crate::util::route_guard::RouteGuard;

pub const REGISTER_PATH: &str = "/register";

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let site_key = use_context::<PublicConfig>().unwrap_or_default().recaptcha_site_key;
    let pathname = use_location().pathname;

    let flow = RwSignal::new(LoginFlow::default());
    let widget = RecaptchaHandle::new();
    let queue = install_effect_queue(BrowserEffects { toasts, session, widget, navigate: use_navigate() });

    Effect::new(move || flow.update(LoginFlow::show_challenge));

    let on_verify = Callback::new(move |token: Option<String>| {
        leptos::task::spawn_local(async move {
            let effects = verify_challenge(&HttpAuthGateway, &flow, token).await;
            queue.update(|q| q.extend(effects));
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let path = pathname.get_untracked();
        leptos::task::spawn_local(async move {
            let effects = submit_login(&HttpAuthGateway, &flow, RouteGuard::protected(), &path).await;
            queue.update(|q| q.extend(effects));
        });
    };

    let email_error = move || flow.with(|f| f.field_errors.email);
    let password_error = move || flow.with(|f| f.field_errors.password);

    view! {
        <div class="login-card">
            <h1>"Login"</h1>
            <p class="login-card__subtitle">"Welcome back!"</p>
            <form class="login-form" on:submit=on_submit novalidate>
                <label class="login-label" for="login-email">
                    "Email"
                </label>
                <input
                    id="login-email"
                    class="login-input"
                    type="email"
                    autocomplete="email"
                    prop:value=move || flow.with(|f| f.fields.email.clone())
                    on:input=move |ev| flow.update(|f| f.set_email(event_target_value(&ev)))
                />
                <Show when=move || email_error().is_some()>
                    <p class="field-error">{move || email_error().unwrap_or_default()}</p>
                </Show>

                <label class="login-label" for="login-password">
                    "Password"
                </label>
                <input
                    id="login-password"
                    class="login-input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || flow.with(|f| f.fields.password.clone())
                    on:input=move |ev| flow.update(|f| f.set_password(event_target_value(&ev)))
                />
                <Show when=move || password_error().is_some()>
                    <p class="field-error">{move || password_error().unwrap_or_default()}</p>
                </Show>

                <Recaptcha site_key=site_key handle=widget on_verify=on_verify/>

                <button
                    class="login-button"
                    type="submit"
                    disabled=move || flow.with(LoginFlow::submit_disabled)
                >
                    {move || if flow.with(LoginFlow::is_submitting) { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="login-card__footer">
                "Do not have any account? "
                <a href=REGISTER_PATH>"Register"</a>
            </p>
        </div>
    }
}
