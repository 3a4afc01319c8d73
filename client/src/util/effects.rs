//! Applies flow effects to toasts, the session store, the router and the
//! challenge widget.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::effect::UiEffect;
use crate::state::login::ChallengeWidget;
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};

/// Where each kind of effect lands.
pub trait EffectSink {
    fn notify(&self, kind: ToastKind, message: String);
    fn reset_challenge(&self);
    fn refresh_session(&self);
    fn navigate(&self, path: &str);
}

/// Apply effects in the order the flow produced them.
pub fn apply_effects(effects: Vec<UiEffect>, sink: &impl EffectSink) {
    for effect in effects {
        match effect {
            UiEffect::Notify(kind, message) => sink.notify(kind, message),
            UiEffect::ResetChallenge => sink.reset_challenge(),
            UiEffect::RefreshSession => sink.refresh_session(),
            UiEffect::Navigate(path) => sink.navigate(&path),
        }
    }
}

/// Install a queue that applies effects from inside a reactive effect.
///
/// Event handlers and spawned tasks push into the returned signal, so they
/// only capture `Copy` signals and never the router's navigate closure.
pub fn install_effect_queue<W, N>(sink: BrowserEffects<W, N>) -> RwSignal<Vec<UiEffect>>
where
    W: ChallengeWidget + 'static,
    N: Fn(&str, NavigateOptions) + 'static,
{
    let queue = RwSignal::new(Vec::<UiEffect>::new());
    Effect::new(move || {
        queue.track();
        if queue.with_untracked(Vec::is_empty) {
            return;
        }
        let effects = queue.try_update(std::mem::take).unwrap_or_default();
        apply_effects(effects, &sink);
    });
    queue
}

/// Sink backed by the app's context signals and the router.
pub struct BrowserEffects<W, N> {
    pub toasts: RwSignal<ToastState>,
    pub session: RwSignal<SessionState>,
    pub widget: W,
    pub navigate: N,
}

impl<W, N> EffectSink for BrowserEffects<W, N>
where
    W: ChallengeWidget,
    N: Fn(&str, NavigateOptions),
{
    fn notify(&self, kind: ToastKind, message: String) {
        let pushed = self.toasts.try_update(|t| t.push(kind, message));
        #[cfg(feature = "hydrate")]
        if let Some(id) = pushed {
            crate::components::toaster::schedule_dismiss(self.toasts, id);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pushed;
    }

    fn reset_challenge(&self) {
        self.widget.reset();
    }

    fn refresh_session(&self) {
        self.session.update(|s| s.set_loading(true));
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
