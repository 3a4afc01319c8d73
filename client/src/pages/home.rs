//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session.with(|s| match s.current_user() {
            Some(user) if !user.name.trim().is_empty() => format!("Welcome back, {}!", user.name),
            Some(_) => "Welcome back!".to_owned(),
            None => "Welcome to Next Mart".to_owned(),
        })
    };

    view! {
        <section class="home">
            <h2>{greeting}</h2>
            <p>"Browse shops and products from sellers near you."</p>
        </section>
    }
}
