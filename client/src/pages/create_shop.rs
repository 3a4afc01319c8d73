//! Shop onboarding at `/create-shop`.

use leptos::prelude::*;

use crate::components::protected::RequireSession;

#[component]
pub fn CreateShopPage() -> impl IntoView {
    view! {
        <RequireSession>
            <section class="create-shop">
                <h2>"Create Your Shop"</h2>
                <p>"Tell buyers who you are. Shop registration opens soon."</p>
            </section>
        </RequireSession>
    }
}
