//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Renders queued toasts; clicking one dismisses it.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.css_modifier())
                            role="status"
                            on:click=move |_| toasts.update(|t| t.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Dismiss toast `id` after the standard delay.
#[cfg(feature = "hydrate")]
pub fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::DISMISS_AFTER_MS).await;
        toasts.try_update(|t| t.dismiss(id));
    });
}
