//! Session gate for member-only pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` only for a signed-in user.
///
/// While the session is still resolving a loading line is shown; once it
/// resolves with no user the visitor is sent to `/login`.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let loading = move || session.with(|s| s.loading);
    let authenticated = move || session.with(SessionState::is_authenticated);

    view! {
        <Show
            when=authenticated
            fallback=move || {
                if loading() {
                    view! { <p class="page-status">"Loading..."</p> }.into_any()
                } else {
                    view! { <p class="page-status">"Redirecting to login..."</p> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
