//! Role dashboard at `/:role/dashboard`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::protected::RequireSession;
use crate::state::session::SessionState;

/// Heading for the dashboard of `role` (the route segment).
pub fn dashboard_title(role: &str) -> String {
    match role {
        "admin" => "Admin Dashboard".to_owned(),
        "" | "user" => "User Dashboard".to_owned(),
        other => format!("{} Dashboard", capitalize(other)),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let params = use_params_map();
    let session = expect_context::<RwSignal<SessionState>>();
    let title = move || dashboard_title(&params.with(|p| p.get("role").unwrap_or_default()));
    let email = move || session.with(|s| s.current_user().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <RequireSession>
            <section class="dashboard">
                <h2>{title}</h2>
                <p class="dashboard__account">"Signed in as " {email}</p>
            </section>
        </RequireSession>
    }
}
