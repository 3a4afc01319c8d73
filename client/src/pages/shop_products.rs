//! Seller product management at `/user/shop/products`.

use leptos::prelude::*;

use crate::components::protected::RequireSession;
use crate::state::session::SessionState;

#[component]
pub fn ManageProductsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let has_shop = move || session.with(|s| s.current_user().is_some_and(|u| u.has_shop));

    view! {
        <RequireSession>
            <section class="shop-products">
                <h2>"Manage Products"</h2>
                <Show
                    when=has_shop
                    fallback=|| {
                        view! {
                            <p>
                                "You do not have a shop yet. "
                                <a href="/create-shop">"Create one"</a>
                            </p>
                        }
                    }
                >
                    <p>"Your products will appear here."</p>
                </Show>
            </section>
        </RequireSession>
    }
}
