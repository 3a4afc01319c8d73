//! Session-aware top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guests get a login link; signed-in users get the create-shop link and an
//! account menu with their role's dashboard and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::HttpAuthGateway;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::sign_out;
use crate::util::effects::{BrowserEffects, install_effect_queue};
use crate::util::route_guard::{LOGIN_PATH, RouteGuard};

pub const CREATE_SHOP_PATH: &str = "/create-shop";

/// What the right-hand side of the navbar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavMenu {
    Guest,
    Member { label: String, dashboard_href: String },
}

#[must_use]
pub fn dashboard_href(role: &Role) -> String {
    format!("/{}/dashboard", role.dashboard_segment())
}

/// Pick the menu for the current session.
pub fn nav_menu(state: &SessionState) -> NavMenu {
    match state.current_user() {
        None => NavMenu::Guest,
        Some(user) => {
            let label = if user.name.trim().is_empty() { user.email.clone() } else { user.name.clone() };
            NavMenu::Member { label, dashboard_href: dashboard_href(&user.role) }
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pathname = use_location().pathname;
    let queue = install_effect_queue(BrowserEffects { toasts, session, widget: (), navigate: use_navigate() });

    let menu = Memo::new(move |_| session.with(nav_menu));
    let menu_open = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        let path = pathname.get_untracked();
        leptos::task::spawn_local(async move {
            let effects = sign_out(&HttpAuthGateway, &path, RouteGuard::protected()).await;
            queue.update(|q| q.extend(effects));
        });
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    <h1>"Next Mart"</h1>
                </a>
                <div class="navbar__search">
                    <input type="text" placeholder="Search for products"/>
                </div>
                <nav class="navbar__actions">
                    {move || match menu.get() {
                        NavMenu::Guest => {
                            view! {
                                <a href=LOGIN_PATH class="btn btn--outline">
                                    "Login"
                                </a>
                            }
                                .into_any()
                        }
                        NavMenu::Member { label, dashboard_href } => {
                            view! {
                                <a href=CREATE_SHOP_PATH class="btn">
                                    "Create Shop"
                                </a>
                                <div class="account-menu">
                                    <button
                                        class="account-menu__trigger"
                                        title=label.clone()
                                        on:click=move |_| menu_open.update(|open| *open = !*open)
                                    >
                                        {label.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                                    </button>
                                    <div
                                        class="account-menu__content"
                                        class:account-menu__content--open=move || menu_open.get()
                                    >
                                        <p class="account-menu__label">"My Account"</p>
                                        <a href=dashboard_href on:click=move |_| menu_open.set(false)>
                                            "Dashboard"
                                        </a>
                                        <button class="account-menu__logout" on:click=on_logout>
                                            "Log Out"
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
