use std::{cell::RefCell, rc::Rc};

use campus_trade_lib::models::{Severity, Toast, ToastStack};
use dominator::{clone, events, html, Dom};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::utils::settings;

thread_local! {
    static NOTIFIER: Rc<Notifier> = Notifier::new();
}

pub fn show(message: impl Into<String>, severity: Severity) {
    NOTIFIER.with(|n| Notifier::show(n.clone(), message.into(), severity));
}

pub fn render() -> Dom {
    NOTIFIER.with(|n| Notifier::render(n.clone()))
}

/// Stack of transient alerts pinned to the top right corner. Every toast
/// lives on its own timer; nothing is queued or merged.
pub struct Notifier {
    stack: RefCell<ToastStack>,
    // mirrors `stack` for rendering
    toasts: MutableVec<Rc<Toast>>,
}

impl Notifier {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            stack: RefCell::new(ToastStack::new()),
            toasts: MutableVec::new(),
        })
    }

    pub fn show(notifier: Rc<Self>, message: String, severity: Severity) {
        let toast = notifier.stack.borrow_mut().push(message, severity);
        let id = toast.id;

        notifier.toasts.lock_mut().push_cloned(Rc::new(toast));

        let lifetime = settings().toast_lifetime_ms;
        spawn_local(clone!(notifier => async move {
            TimeoutFuture::new(lifetime).await;
            notifier.dismiss(id);
        }));
    }

    /// Safe to call for a toast that is already gone.
    pub fn dismiss(&self, id: usize) -> bool {
        let Some(index) = self.stack.borrow_mut().dismiss(id) else {
            return false;
        };
        self.toasts.lock_mut().remove(index);
        true
    }

    pub fn render(notifier: Rc<Self>) -> Dom {
        html!("div", {
            .class("toast-stack")
            .style("position", "fixed")
            .style("top", "20px")
            .style("right", "20px")
            .style("z-index", "9999")
            .children_signal_vec(notifier.toasts.signal_vec_cloned().map(clone!(notifier => move |toast| {
                Self::render_toast(notifier.clone(), toast)
            })))
        })
    }

    fn render_toast(notifier: Rc<Self>, toast: Rc<Toast>) -> Dom {
        let severity_class = toast.severity.alert_class();

        html!("div", {
            .attr("role", "alert")
            .attr("data-toast", "")
            .class("alert")
            .class(severity_class.as_str())
            .class("alert-dismissible")
            .class("fade")
            .class("show")
            .style("min-width", "250px")
            .text(&toast.message)
            .children(&mut [
                html!("button", {
                    .attr("type", "button")
                    .attr("aria-label", "Close")
                    .class("btn-close")
                    .event(clone!(notifier, toast => move |_: events::Click| {
                        notifier.dismiss(toast.id);
                    }))
                })
            ])
        })
    }
}
