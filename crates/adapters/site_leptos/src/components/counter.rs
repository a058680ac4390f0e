//! Scroll-triggered counter.
//!
//! An `IntersectionObserver` feeds visibility ratios to the domain
//! [`Counter`]. Once it triggers, the observer is disconnected and a timer
//! loop ticks the counter up to its target. Unmounting disconnects the
//! observer and disposes the counter signal, which ends the timer loop.

use std::ops::ControlFlow;

use clinic_domain::content::Stat;
use clinic_domain::counter::{Counter, Observation, TICK_MILLIS, VISIBILITY_THRESHOLD};
use gloo_timers::future::TimeoutFuture;
use leptos::html::Span;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer and the callback it holds a reference to.
struct Observing {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observing {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tick `counter` every [`TICK_MILLIS`] until it finishes or is disposed.
fn run_ticks(counter: RwSignal<Counter>) {
    let tick_ms = u32::try_from(TICK_MILLIS).unwrap_or(u32::MAX);
    spawn_local(async move {
        loop {
            TimeoutFuture::new(tick_ms).await;
            // `None` once the component is gone and the signal disposed.
            match counter.try_update(Counter::advance) {
                Some(ControlFlow::Continue(_)) => {}
                Some(ControlFlow::Break(_)) | None => break,
            }
        }
    });
}

fn observe(
    element: &web_sys::Element,
    counter: RwSignal<Counter>,
    observing: StoredValue<Option<Observing>, LocalStorage>,
) -> Result<(), JsValue> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let ratio = entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .intersection_ratio();
                if counter.try_update(|c| c.observe(ratio)) == Some(Observation::Triggered) {
                    // Dropping disconnects; defer it out of the running callback.
                    spawn_local(async move {
                        observing.try_update_value(Option::take);
                    });
                    run_ticks(counter);
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    observing.set_value(Some(Observing {
        observer,
        _callback: callback,
    }));
    Ok(())
}

/// A stat whose number counts up from 0 when scrolled into view.
#[component]
pub fn StatCounter(stat: Stat) -> impl IntoView {
    let node = NodeRef::<Span>::new();
    let counter = RwSignal::new(stat.counter());
    let observing = StoredValue::new_local(None::<Observing>);

    Effect::new(move |_| {
        if let Some(element) = node.get() {
            if observing.with_value(Option::is_some) {
                return;
            }
            if let Err(err) = observe(&element, counter, observing) {
                leptos::logging::warn!("cannot observe counter, showing final value: {err:?}");
                counter.update(|c| {
                    c.observe(1.0);
                    while c.tick().is_some() {}
                });
            }
        }
    });

    on_cleanup(move || {
        observing.try_update_value(Option::take);
    });

    let suffix = stat.suffix();
    view! {
        <div class="stat">
            <span class="stat-value counter" node_ref=node>
                {move || format!("{}{}", counter.with(Counter::value), suffix)}
            </span>
            <p>{stat.label.clone()}</p>
        </div>
    }
}
