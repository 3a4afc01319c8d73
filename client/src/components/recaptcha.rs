//! reCAPTCHA v2 checkbox widget.
//!
//! The widget is rendered explicitly through the `grecaptcha` global once the
//! provider script has loaded. Tokens (and expiries, as `None`) are reported
//! through `on_verify`; `RecaptchaHandle` is the reset capability handed to
//! the login flow.
//!
//! TRADE-OFFS
//! ==========
//! The JavaScript callbacks are leaked for the page's lifetime because the
//! provider keeps calling them after render.

use leptos::prelude::*;

use crate::state::login::ChallengeWidget;

#[cfg(feature = "hydrate")]
const READY_POLL_ATTEMPTS: u32 = 50;
#[cfg(feature = "hydrate")]
const READY_POLL_MS: u32 = 100;

/// Reset capability for a rendered widget.
#[derive(Clone, Copy, Debug)]
pub struct RecaptchaHandle {
    widget_id: RwSignal<Option<i32>>,
}

impl RecaptchaHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { widget_id: RwSignal::new(None) }
    }
}

impl Default for RecaptchaHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeWidget for RecaptchaHandle {
    fn reset(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(id) = self.widget_id.get_untracked() {
            js::reset(id);
        }
    }
}

#[component]
pub fn Recaptcha(site_key: String, handle: RecaptchaHandle, on_verify: Callback<Option<String>>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let site_key = site_key.clone();
        Effect::new(move || {
            let Some(el) = container.get() else {
                return;
            };
            if site_key.is_empty() || handle.widget_id.get_untracked().is_some() {
                return;
            }
            let site_key = site_key.clone();
            leptos::task::spawn_local(async move {
                match js::render_when_ready(&el, &site_key, on_verify).await {
                    Ok(id) => handle.widget_id.set(Some(id)),
                    Err(e) => leptos::logging::warn!("recaptcha render failed: {e}"),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (handle, on_verify);

    let configured = !site_key.is_empty();
    view! {
        <div class="recaptcha" node_ref=container>
            <Show when=move || !configured>
                <p class="recaptcha__missing">"Bot verification is not configured."</p>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod js {
    use leptos::prelude::{Callable, Callback};
    use wasm_bindgen::prelude::*;

    use super::{READY_POLL_ATTEMPTS, READY_POLL_MS};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = render)]
        fn grecaptcha_render(container: &web_sys::HtmlElement, params: &js_sys::Object) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = reset)]
        fn grecaptcha_reset(widget_id: i32) -> Result<(), JsValue>;
    }

    fn api_ready() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::get(&window, &JsValue::from_str("grecaptcha"))
            .ok()
            .filter(|g| !g.is_undefined())
            .and_then(|g| js_sys::Reflect::get(&g, &JsValue::from_str("render")).ok())
            .is_some_and(|render| render.is_function())
    }

    pub(super) async fn render_when_ready(
        el: &web_sys::HtmlElement,
        site_key: &str,
        on_verify: Callback<Option<String>>,
    ) -> Result<i32, String> {
        for _ in 0..READY_POLL_ATTEMPTS {
            if api_ready() {
                return render(el, site_key, on_verify);
            }
            gloo_timers::future::TimeoutFuture::new(READY_POLL_MS).await;
        }
        Err("grecaptcha script did not load".to_owned())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(el: &web_sys::HtmlElement, site_key: &str, on_verify: Callback<Option<String>>) -> Result<i32, String> {
        let params = js_sys::Object::new();
        let set = |key: &str, value: &JsValue| {
            js_sys::Reflect::set(&params, &JsValue::from_str(key), value)
                .map(|_| ())
                .map_err(|e| format!("{e:?}"))
        };

        let verified = Closure::<dyn Fn(String)>::new(move |token: String| on_verify.run(Some(token)));
        let expired = Closure::<dyn Fn()>::new(move || on_verify.run(None));
        set("sitekey", &JsValue::from_str(site_key))?;
        set("callback", verified.as_ref())?;
        set("expired-callback", expired.as_ref())?;
        verified.forget();
        expired.forget();

        let id = grecaptcha_render(el, &params).map_err(|e| format!("{e:?}"))?;
        id.as_f64()
            .map(|v| v as i32)
            .ok_or_else(|| "render returned no widget id".to_owned())
    }

    pub(super) fn reset(widget_id: i32) {
        if let Err(e) = grecaptcha_reset(widget_id) {
            leptos::logging::warn!("recaptcha reset failed: {e:?}");
        }
    }
}
