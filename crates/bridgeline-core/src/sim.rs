//! Deterministic host for reveal effects.
//!
//! `VirtualHost` executes [`EffectCommand`]s against a virtual millisecond
//! clock instead of browser timers. It is a single-threaded event loop: timer
//! ticks fire in due-time order (ties broken by mount order), and intersection
//! events are delivered synchronously when visibility changes. Every displayed
//! value is recorded with its timestamp so playback can be inspected.

use std::collections::{BTreeMap, VecDeque};

use thiserror::Error;

use crate::render::{RenderedPage, RevealSlot};
use crate::reveal::{EffectCommand, RevealEffect, RevealError, RevealPhase, TimerToken};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Slot {0} is already mounted")]
    DuplicateSlot(String),

    #[error("Unknown slot {0}")]
    UnknownSlot(String),

    #[error("Invalid reveal effect for slot {slot}: {source}")]
    InvalidEffect {
        slot: String,
        #[source]
        source: RevealError,
    },
}

/// A displayed value and the virtual time it appeared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub at_ms: u64,
    pub text: String,
}

struct ScheduledTimer {
    token: TimerToken,
    period_ms: u64,
    /// `None` once the next tick would fall past the end of the clock.
    next_due_ms: Option<u64>,
}

struct Hosted {
    effect: RevealEffect,
    seq: u64,
    timer: Option<ScheduledTimer>,
    observer: Option<f64>,
    visibility: f64,
    ticks: u64,
    history: Vec<Frame>,
}

#[derive(Default)]
pub struct VirtualHost {
    now_ms: u64,
    next_seq: u64,
    slots: BTreeMap<String, Hosted>,
}

impl VirtualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an effect under `slot`. Its initial value is recorded at the
    /// current time.
    pub fn mount(&mut self, slot: &str, effect: RevealEffect) -> Result<(), HostError> {
        if self.slots.contains_key(slot) {
            return Err(HostError::DuplicateSlot(slot.to_string()));
        }

        let hosted = Hosted {
            history: vec![Frame {
                at_ms: self.now_ms,
                text: effect.displayed().to_string(),
            }],
            effect,
            seq: self.next_seq,
            timer: None,
            observer: None,
            visibility: 0.0,
            ticks: 0,
        };
        self.next_seq += 1;
        self.slots.insert(slot.to_string(), hosted);

        let commands = self.hosted_mut(slot)?.effect.mount();
        self.apply(slot, commands);
        Ok(())
    }

    /// Build and mount the effect described by a rendered slot.
    pub fn mount_slot(&mut self, slot: &RevealSlot) -> Result<(), HostError> {
        let effect = slot.effect().map_err(|source| HostError::InvalidEffect {
            slot: slot.id.clone(),
            source,
        })?;
        self.mount(&slot.id, effect)
    }

    /// Mount every reveal slot of a rendered page.
    pub fn mount_page(&mut self, page: &RenderedPage) -> Result<(), HostError> {
        for slot in &page.reveals {
            self.mount_slot(slot)?;
        }
        Ok(())
    }

    /// Tear the effect down. Its history stays available for inspection.
    pub fn unmount(&mut self, slot: &str) -> Result<(), HostError> {
        let commands = self.hosted_mut(slot)?.effect.unmount();
        self.apply(slot, commands);
        Ok(())
    }

    pub fn retarget(&mut self, slot: &str, text: &str) -> Result<(), HostError> {
        let commands = self.hosted_mut(slot)?.effect.retarget(text);
        self.apply(slot, commands);
        Ok(())
    }

    /// Report how much of the slot's host region is on screen. Delivered to
    /// the effect only while an observation is attached.
    pub fn set_visibility(&mut self, slot: &str, ratio: f64) -> Result<(), HostError> {
        let hosted = self.hosted_mut(slot)?;
        hosted.visibility = ratio;
        if hosted.observer.is_none() {
            return Ok(());
        }
        let commands = hosted.effect.on_intersection(ratio);
        self.apply(slot, commands);
        Ok(())
    }

    /// Run every timer tick due at or before `target_ms`, then move the clock
    /// to `target_ms`. Moving backwards is a no-op.
    pub fn advance_to(&mut self, target_ms: u64) {
        while let Some((slot, due)) = self.next_due(target_ms) {
            self.now_ms = due;

            let Some(hosted) = self.slots.get_mut(&slot) else {
                break;
            };
            let Some(timer) = hosted.timer.as_mut() else {
                continue;
            };
            let token = timer.token;
            timer.next_due_ms = due.checked_add(timer.period_ms);
            hosted.ticks += 1;

            let commands = hosted.effect.on_tick(token);
            self.apply(&slot, commands);
        }
        self.now_ms = self.now_ms.max(target_ms);
    }

    pub fn advance_by(&mut self, delta_ms: u64) {
        self.advance_to(self.now_ms.saturating_add(delta_ms));
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn text(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(|h| h.effect.displayed())
    }

    /// The value that was on display at `at_ms`.
    pub fn text_at(&self, slot: &str, at_ms: u64) -> Option<&str> {
        self.slots.get(slot).and_then(|h| {
            h.history
                .iter()
                .rev()
                .find(|frame| frame.at_ms <= at_ms)
                .map(|frame| frame.text.as_str())
        })
    }

    pub fn phase(&self, slot: &str) -> Option<RevealPhase> {
        self.slots.get(slot).map(|h| h.effect.phase())
    }

    /// Every distinct value shown, in order.
    pub fn history(&self, slot: &str) -> Option<&[Frame]> {
        self.slots.get(slot).map(|h| h.history.as_slice())
    }

    /// Number of timer ticks delivered to the slot so far.
    pub fn ticks(&self, slot: &str) -> Option<u64> {
        self.slots.get(slot).map(|h| h.ticks)
    }

    /// Running timers across all slots.
    pub fn active_timers(&self) -> usize {
        self.slots.values().filter(|h| h.timer.is_some()).count()
    }

    /// Attached intersection observations across all slots.
    pub fn active_observers(&self) -> usize {
        self.slots.values().filter(|h| h.observer.is_some()).count()
    }

    fn hosted_mut(&mut self, slot: &str) -> Result<&mut Hosted, HostError> {
        self.slots
            .get_mut(slot)
            .ok_or_else(|| HostError::UnknownSlot(slot.to_string()))
    }

    fn next_due(&self, limit_ms: u64) -> Option<(String, u64)> {
        self.slots
            .iter()
            .filter_map(|(id, h)| {
                let due = h.timer.as_ref()?.next_due_ms?;
                Some((due, h.seq, id))
            })
            .filter(|(due, _, _)| *due <= limit_ms)
            .min_by_key(|(due, seq, _)| (*due, *seq))
            .map(|(due, _, id)| (id.clone(), due))
    }

    /// Carry out commands for one slot. Attaching an observation reports the
    /// current visibility straight away, which may produce more commands.
    fn apply(&mut self, slot: &str, commands: Vec<EffectCommand>) {
        let now_ms = self.now_ms;
        let Some(hosted) = self.slots.get_mut(slot) else {
            return;
        };

        let mut queue = VecDeque::from([commands]);
        while let Some(batch) = queue.pop_front() {
            let mut initial_report = false;

            for command in batch {
                match command {
                    EffectCommand::StartTimer { token, period_ms } => {
                        let period_ms = u64::from(period_ms);
                        hosted.timer = Some(ScheduledTimer {
                            token,
                            period_ms,
                            next_due_ms: now_ms.checked_add(period_ms),
                        });
                    }
                    EffectCommand::CancelTimer { token } => {
                        if hosted.timer.as_ref().is_some_and(|t| t.token == token) {
                            hosted.timer = None;
                        }
                    }
                    EffectCommand::Observe { threshold } => {
                        hosted.observer = Some(threshold);
                        initial_report = true;
                    }
                    EffectCommand::Disconnect => hosted.observer = None,
                    EffectCommand::Paint => {
                        let text = hosted.effect.displayed();
                        let changed = hosted.history.last().map_or(true, |f| f.text != text);
                        if changed {
                            hosted.history.push(Frame {
                                at_ms: now_ms,
                                text: text.to_string(),
                            });
                        }
                    }
                }
            }

            if initial_report && hosted.observer.is_some() {
                queue.push_back(hosted.effect.on_intersection(hosted.visibility));
            }
        }
    }
}
