//! Binds a core [`RevealEffect`] to a DOM element.
//!
//! The effect decides what happens; this module carries out its commands with
//! real browser timers and observers. Callbacks hold a `Weak` reference to the
//! binding state, so once the binding is dropped nothing can reach the effect.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bridgeline_core::{EffectCommand, RevealEffect, RevealPhase, RevealSlot, TimerToken};
use serde::Serialize;
use web_sys::Element;

use crate::dom::{self, DomError};
use crate::log_to_console;
use crate::observer::VisibilityObserver;
use crate::timer::Interval;

struct BindingState {
    slot_id: String,
    effect: RevealEffect,
    element: Element,
    /// The current (or last, already cancelled) interval.
    interval: Option<Interval>,
    /// The observation, possibly already disconnected.
    observer: Option<VisibilityObserver>,
}

/// Per-slot snapshot exposed to JavaScript.
#[derive(Serialize)]
pub struct SlotStatus {
    pub id: String,
    pub phase: RevealPhase,
    pub revealed: usize,
    pub total: usize,
    pub timer_active: bool,
    pub observing: bool,
}

/// A mounted reveal effect. Dropping it tears the effect down.
pub struct RevealBinding {
    state: Rc<RefCell<BindingState>>,
}

impl RevealBinding {
    /// Find the slot's host element under `root` and mount its effect.
    pub fn mount(root: &Element, slot: &RevealSlot) -> Result<Self, DomError> {
        let effect = slot
            .effect()
            .map_err(|e| DomError::InvalidEffect(slot.id.clone(), e))?;
        let element = dom::element_in(root, &slot.id)?;

        let state = Rc::new(RefCell::new(BindingState {
            slot_id: slot.id.clone(),
            effect,
            element,
            interval: None,
            observer: None,
        }));

        let commands = state.borrow_mut().effect.mount();
        apply(&state, commands)?;
        Ok(Self { state })
    }

    pub fn slot_id(&self) -> String {
        self.state.borrow().slot_id.clone()
    }

    /// Swap in a new target string; the reveal restarts from the beginning.
    pub fn retarget(&self, text: &str) -> Result<(), DomError> {
        let commands = self.state.borrow_mut().effect.retarget(text);
        apply(&self.state, commands)
    }

    pub fn status(&self) -> SlotStatus {
        let state = self.state.borrow();
        SlotStatus {
            id: state.slot_id.clone(),
            phase: state.effect.phase(),
            revealed: state.effect.revealed_len(),
            total: state.effect.char_len(),
            timer_active: state.interval.as_ref().is_some_and(Interval::is_active),
            observing: state
                .observer
                .as_ref()
                .is_some_and(VisibilityObserver::is_connected),
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        let commands = self.state.borrow_mut().effect.unmount();
        if let Err(e) = apply(&self.state, commands) {
            log_to_console(&format!("[Bridgeline] Teardown error: {}", e));
        }
        // The guards are freed with the state; callbacks only hold weak references
    }
}

fn on_tick(weak: &Weak<RefCell<BindingState>>, token: TimerToken) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let commands = state.borrow_mut().effect.on_tick(token);
    if let Err(e) = apply(&state, commands) {
        log_to_console(&format!("[Bridgeline] Tick error: {}", e));
    }
}

fn on_intersection(weak: &Weak<RefCell<BindingState>>, ratio: f64) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let commands = state.borrow_mut().effect.on_intersection(ratio);
    if let Err(e) = apply(&state, commands) {
        log_to_console(&format!("[Bridgeline] Visibility error: {}", e));
    }
}

/// Execute effect commands. Called from timer and observer callbacks, so it
/// only cancels or disconnects the running guards and never drops them here.
fn apply(state: &Rc<RefCell<BindingState>>, commands: Vec<EffectCommand>) -> Result<(), DomError> {
    for command in commands {
        match command {
            EffectCommand::StartTimer { token, period_ms } => {
                let weak = Rc::downgrade(state);
                let interval = Interval::start(period_ms, move || on_tick(&weak, token))?;
                let mut state = state.borrow_mut();
                log_to_console(&format!(
                    "[Bridgeline] Reveal '{}' started: {} chars every {}ms",
                    state.slot_id,
                    state.effect.char_len(),
                    period_ms
                ));
                // Starts never happen inside a tick, so replacing the old guard is safe
                state.interval = Some(interval);
            }
            EffectCommand::CancelTimer { .. } => {
                let state = state.borrow();
                if let Some(interval) = &state.interval {
                    interval.cancel();
                }
                if state.effect.phase() == RevealPhase::Complete {
                    log_to_console(&format!("[Bridgeline] Reveal '{}' complete", state.slot_id));
                }
            }
            EffectCommand::Observe { threshold } => {
                let weak = Rc::downgrade(state);
                let element = state.borrow().element.clone();
                let observer = VisibilityObserver::observe(&element, threshold, move |ratio| {
                    on_intersection(&weak, ratio)
                })?;
                state.borrow_mut().observer = Some(observer);
            }
            EffectCommand::Disconnect => {
                if let Some(observer) = &state.borrow().observer {
                    observer.disconnect();
                }
            }
            EffectCommand::Paint => {
                let state = state.borrow();
                state.element.set_text_content(Some(state.effect.displayed()));
            }
        }
    }
    Ok(())
}
