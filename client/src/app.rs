//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, toaster::Toaster};
use crate::config::{PublicConfig, RECAPTCHA_SCRIPT_URL, RECAPTCHA_SITE_KEY_META};
use crate::net::api::HttpAuthGateway;
use crate::pages::{
    create_shop::CreateShopPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    shop_products::ManageProductsPage,
};
use crate::state::{session::SessionState, toast::ToastState};
use crate::util::auth::install_session_resolver;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides [`PublicConfig`] as context; its values are published as
/// `<meta>` tags for the hydrated app to read back.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<PublicConfig>().unwrap_or_default();
    let load_challenge = config.challenge_configured();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=RECAPTCHA_SITE_KEY_META content=config.recaptcha_site_key/>
                {load_challenge.then(|| view! { <script src=RECAPTCHA_SCRIPT_URL defer="defer"></script> })}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast stores, starts session resolution, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::startup());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    install_session_resolver(session, HttpAuthGateway);

    view! {
        <Stylesheet id="leptos" href="/pkg/nextmart.css"/>
        <Title text="Next Mart"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("create-shop") view=CreateShopPage/>
                    <Route
                        path=(StaticSegment("user"), StaticSegment("shop"), StaticSegment("products"))
                        view=ManageProductsPage
                    />
                    <Route path=(ParamSegment("role"), StaticSegment("dashboard")) view=DashboardPage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
