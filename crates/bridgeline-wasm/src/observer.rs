//! Scoped `IntersectionObserver` handle.

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::DomError;

/// Watches one element and reports its intersection ratio while it overlaps
/// the viewport. Disconnected on [`VisibilityObserver::disconnect`] or on drop.
///
/// Same rule as [`crate::timer::Interval`]: disconnect inside the callback,
/// drop outside it.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    connected: Cell<bool>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        target: &Element,
        threshold: f64,
        mut on_ratio: impl FnMut(f64) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    // Off-screen reports carry ratio 0 and would open a zero threshold
                    if entry.is_intersecting() {
                        on_ratio(entry.intersection_ratio());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| DomError::JsCall(format!("IntersectionObserver: {:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            connected: Cell::new(true),
            _callback: callback,
        })
    }

    /// Stop observing. Idempotent.
    pub fn disconnect(&self) {
        if self.connected.replace(false) {
            self.observer.disconnect();
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
