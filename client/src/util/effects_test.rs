use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct RecordingSink {
    log: RefCell<Vec<String>>,
}

impl EffectSink for RecordingSink {
    fn notify(&self, kind: ToastKind, message: String) {
        self.log.borrow_mut().push(format!("notify:{kind:?}:{message}"));
    }

    fn reset_challenge(&self) {
        self.log.borrow_mut().push("reset_challenge".to_owned());
    }

    fn refresh_session(&self) {
        self.log.borrow_mut().push("refresh_session".to_owned());
    }

    fn navigate(&self, path: &str) {
        self.log.borrow_mut().push(format!("navigate:{path}"));
    }
}

#[test]
fn effects_apply_in_flow_order() {
    let sink = RecordingSink::default();
    apply_effects(
        vec![
            UiEffect::success("Logged in"),
            UiEffect::ResetChallenge,
            UiEffect::RefreshSession,
            UiEffect::Navigate("/".to_owned()),
        ],
        &sink,
    );
    assert_eq!(
        *sink.log.borrow(),
        vec!["notify:Success:Logged in", "reset_challenge", "refresh_session", "navigate:/"]
    );
}

#[test]
fn no_effects_touch_nothing() {
    let sink = RecordingSink::default();
    apply_effects(Vec::new(), &sink);
    assert!(sink.log.borrow().is_empty());
}

#[test]
fn unit_widget_reset_is_a_noop() {
    ().reset();
}
