//! Scoped `setInterval` handle.

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::{self, DomError};

/// A running browser interval. Cleared on [`Interval::cancel`] or on drop,
/// whichever comes first.
///
/// Cancelling from inside the interval's own callback is fine; dropping it
/// there is not, since that would free the closure while it runs. Callers
/// cancel in the callback and drop later.
pub struct Interval {
    handle: i32,
    active: Cell<bool>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, DomError> {
        let window = dom::window()?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| DomError::JsCall(format!("setInterval: {:?}", e)))?;

        Ok(Self {
            handle,
            active: Cell::new(true),
            _callback: callback,
        })
    }

    /// Stop the interval. Idempotent.
    pub fn cancel(&self) {
        if self.active.replace(false) {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(self.handle);
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
