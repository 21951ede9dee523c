use serde::{Deserialize, Serialize};

use super::gate::VisibilityGate;
use super::typewriter::{StepOutcome, TextReveal};
use super::RevealError;

/// What starts a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Start as soon as the effect is mounted.
    Immediate,
    /// Start the first time the host region's intersection ratio reaches
    /// `threshold`.
    OnVisible { threshold: f64 },
}

impl Trigger {
    /// Value used for the `data-reveal` attribute on the host element.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Trigger::Immediate => "immediate",
            Trigger::OnVisible { .. } => "visible",
        }
    }
}

/// Lifecycle of a reveal effect.
///
/// `Idle → Revealing → Complete`. An effect that starts immediately skips
/// `Idle` on mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    Idle,
    Revealing,
    Complete,
}

/// Identifies one started timer. A fresh token is issued every time a timer
/// starts, so ticks from a cancelled timer can be told apart and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Instruction from an effect to whatever hosts it.
///
/// Effects never touch timers or observers themselves. The host executes
/// these commands in order and routes the resulting callbacks back through
/// [`RevealEffect::on_tick`] and [`RevealEffect::on_intersection`].
#[derive(Clone, Debug, PartialEq)]
pub enum EffectCommand {
    /// Start a repeating timer that delivers `token` every `period_ms`.
    StartTimer { token: TimerToken, period_ms: u32 },
    /// Stop the timer identified by `token`.
    CancelTimer { token: TimerToken },
    /// Attach an intersection observation to the host region.
    Observe { threshold: f64 },
    /// Detach the intersection observation.
    Disconnect,
    /// The displayed text changed; read it back with [`RevealEffect::displayed`].
    Paint,
}

/// A text reveal bound to a trigger.
///
/// This is the single mechanism behind both the hero typewriter (immediate)
/// and the card text (visibility-gated). It is a pure state machine: every
/// method returns the commands its host must carry out.
#[derive(Clone, Debug)]
pub struct RevealEffect {
    reveal: TextReveal,
    interval_ms: u32,
    trigger: Trigger,
    gate: Option<VisibilityGate>,
    phase: RevealPhase,
    timer: Option<TimerToken>,
    next_token: u64,
    observing: bool,
    mounted: bool,
    torn_down: bool,
}

impl RevealEffect {
    pub fn new(
        text: impl Into<String>,
        interval_ms: u32,
        trigger: Trigger,
    ) -> Result<Self, RevealError> {
        if interval_ms == 0 {
            return Err(RevealError::ZeroInterval);
        }
        let gate = match trigger {
            Trigger::Immediate => None,
            Trigger::OnVisible { threshold } => Some(VisibilityGate::new(threshold)?),
        };
        Ok(Self {
            reveal: TextReveal::new(text),
            interval_ms,
            trigger,
            gate,
            phase: RevealPhase::Idle,
            timer: None,
            next_token: 0,
            observing: false,
            mounted: false,
            torn_down: false,
        })
    }

    /// Timed reveal that starts on mount.
    pub fn immediate(text: impl Into<String>, interval_ms: u32) -> Result<Self, RevealError> {
        Self::new(text, interval_ms, Trigger::Immediate)
    }

    /// Reveal that waits until its host region is at least `threshold` visible.
    pub fn on_visible(
        text: impl Into<String>,
        interval_ms: u32,
        threshold: f64,
    ) -> Result<Self, RevealError> {
        Self::new(text, interval_ms, Trigger::OnVisible { threshold })
    }

    /// Attach the effect to its host. Calling it twice, or after teardown,
    /// does nothing.
    pub fn mount(&mut self) -> Vec<EffectCommand> {
        if self.mounted || self.torn_down {
            return Vec::new();
        }
        self.mounted = true;

        match self.trigger {
            Trigger::Immediate => self.begin(),
            Trigger::OnVisible { threshold } => {
                self.observing = true;
                vec![EffectCommand::Observe { threshold }]
            }
        }
    }

    /// Deliver an intersection ratio reported for the host region.
    pub fn on_intersection(&mut self, ratio: f64) -> Vec<EffectCommand> {
        if !self.is_live() || !self.observing {
            return Vec::new();
        }
        let opened = self.gate.as_mut().is_some_and(|gate| gate.observe(ratio));
        if !opened {
            return Vec::new();
        }

        self.observing = false;
        let mut commands = vec![EffectCommand::Disconnect];
        commands.extend(self.begin());
        commands
    }

    /// Deliver a timer tick. Ticks carrying a token other than the active
    /// timer's are stale and ignored.
    pub fn on_tick(&mut self, token: TimerToken) -> Vec<EffectCommand> {
        if !self.is_live() || self.timer != Some(token) {
            return Vec::new();
        }

        match self.reveal.step() {
            StepOutcome::Advanced => vec![EffectCommand::Paint],
            StepOutcome::Finished => {
                self.timer = None;
                self.phase = RevealPhase::Complete;
                vec![EffectCommand::Paint, EffectCommand::CancelTimer { token }]
            }
        }
    }

    /// Replace the target string.
    ///
    /// Any running timer is cancelled and the counter restarts at 0. If the
    /// effect was already allowed to run (immediate trigger, or the gate has
    /// opened) the new string starts revealing right away; otherwise it waits
    /// for the gate like the original one did.
    pub fn retarget(&mut self, text: impl Into<String>) -> Vec<EffectCommand> {
        if self.torn_down {
            return Vec::new();
        }

        let mut commands = self.cancel_timer();
        self.reveal = TextReveal::new(text);

        if !self.mounted {
            self.phase = RevealPhase::Idle;
            return commands;
        }

        if self.is_gate_open() {
            commands.extend(self.begin());
        } else {
            self.phase = RevealPhase::Idle;
            commands.push(EffectCommand::Paint);
        }
        commands
    }

    /// Release the timer and the observation. The effect is inert afterwards.
    pub fn unmount(&mut self) -> Vec<EffectCommand> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        self.mounted = false;

        let mut commands = self.cancel_timer();
        if self.observing {
            self.observing = false;
            commands.push(EffectCommand::Disconnect);
        }
        commands
    }

    pub fn displayed(&self) -> &str {
        self.reveal.displayed()
    }

    pub fn target(&self) -> &str {
        self.reveal.target()
    }

    pub fn revealed_len(&self) -> usize {
        self.reveal.revealed_len()
    }

    pub fn char_len(&self) -> usize {
        self.reveal.char_len()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn active_timer(&self) -> Option<TimerToken> {
        self.timer
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn is_live(&self) -> bool {
        self.mounted && !self.torn_down
    }

    fn is_gate_open(&self) -> bool {
        match &self.gate {
            None => true,
            Some(gate) => gate.is_open(),
        }
    }

    /// Enter `Revealing`: apply the first step now, then start the timer
    /// unless there was nothing to reveal.
    fn begin(&mut self) -> Vec<EffectCommand> {
        self.phase = RevealPhase::Revealing;
        let mut commands = vec![EffectCommand::Paint];

        match self.reveal.step() {
            StepOutcome::Finished => self.phase = RevealPhase::Complete,
            StepOutcome::Advanced => {
                let token = TimerToken(self.next_token);
                self.next_token += 1;
                self.timer = Some(token);
                commands.push(EffectCommand::StartTimer {
                    token,
                    period_ms: self.interval_ms,
                });
            }
        }
        commands
    }

    fn cancel_timer(&mut self) -> Vec<EffectCommand> {
        match self.timer.take() {
            Some(token) => vec![EffectCommand::CancelTimer { token }],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_token(commands: &[EffectCommand]) -> TimerToken {
        commands
            .iter()
            .find_map(|c| match c {
                EffectCommand::StartTimer { token, .. } => Some(*token),
                _ => None,
            })
            .expect("no timer started")
    }

    #[test]
    fn test_immediate_effect_starts_timer_on_mount() {
        let mut effect = RevealEffect::immediate("OK", 50).unwrap();
        assert_eq!(effect.phase(), RevealPhase::Idle);

        let commands = effect.mount();
        assert_eq!(commands[0], EffectCommand::Paint);
        assert!(matches!(
            commands[1],
            EffectCommand::StartTimer { period_ms: 50, .. }
        ));
        assert_eq!(effect.phase(), RevealPhase::Revealing);
        assert_eq!(effect.displayed(), "");
    }

    #[test]
    fn test_timer_cancelled_on_last_character() {
        let mut effect = RevealEffect::immediate("OK", 50).unwrap();
        let token = started_token(&effect.mount());

        assert_eq!(effect.on_tick(token), vec![EffectCommand::Paint]);
        assert_eq!(effect.displayed(), "O");

        assert_eq!(
            effect.on_tick(token),
            vec![EffectCommand::Paint, EffectCommand::CancelTimer { token }]
        );
        assert_eq!(effect.displayed(), "OK");
        assert_eq!(effect.phase(), RevealPhase::Complete);
        assert!(effect.active_timer().is_none());

        // A tick that was already queued changes nothing
        assert!(effect.on_tick(token).is_empty());
        assert_eq!(effect.displayed(), "OK");
    }

    #[test]
    fn test_empty_text_completes_without_timer() {
        let mut effect = RevealEffect::immediate("", 20).unwrap();
        let commands = effect.mount();
        assert_eq!(commands, vec![EffectCommand::Paint]);
        assert_eq!(effect.phase(), RevealPhase::Complete);
        assert!(effect.active_timer().is_none());
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(matches!(
            RevealEffect::immediate("x", 0),
            Err(RevealError::ZeroInterval)
        ));
        assert!(matches!(
            RevealEffect::on_visible("x", 5, 2.0),
            Err(RevealError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn test_gated_effect_waits_for_visibility() {
        let mut effect = RevealEffect::on_visible("HI", 10, 0.1).unwrap();
        assert_eq!(effect.mount(), vec![EffectCommand::Observe { threshold: 0.1 }]);
        assert!(effect.is_observing());

        assert!(effect.on_intersection(0.0).is_empty());
        assert!(effect.on_intersection(0.05).is_empty());
        assert_eq!(effect.phase(), RevealPhase::Idle);
        assert_eq!(effect.displayed(), "");
        assert!(effect.active_timer().is_none());

        let commands = effect.on_intersection(0.1);
        assert_eq!(commands[0], EffectCommand::Disconnect);
        assert_eq!(commands[1], EffectCommand::Paint);
        assert!(matches!(commands[2], EffectCommand::StartTimer { .. }));
        assert!(!effect.is_observing());
        assert_eq!(effect.phase(), RevealPhase::Revealing);

        // Observation is gone; later events are ignored
        assert!(effect.on_intersection(1.0).is_empty());
    }

    #[test]
    fn test_retarget_cancels_and_restarts() {
        let mut effect = RevealEffect::immediate("first", 10).unwrap();
        let old = started_token(&effect.mount());
        effect.on_tick(old);
        effect.on_tick(old);
        assert_eq!(effect.displayed(), "fi");

        let commands = effect.retarget("next");
        assert_eq!(commands[0], EffectCommand::CancelTimer { token: old });
        let new = started_token(&commands);
        assert_ne!(old, new);
        assert_eq!(effect.displayed(), "");

        // The cancelled timer may still deliver a tick; it must be ignored
        assert!(effect.on_tick(old).is_empty());
        assert_eq!(effect.displayed(), "");

        effect.on_tick(new);
        assert_eq!(effect.displayed(), "n");
    }

    #[test]
    fn test_retarget_before_gate_opens_stays_idle() {
        let mut effect = RevealEffect::on_visible("one", 10, 0.1).unwrap();
        effect.mount();
        let commands = effect.retarget("two");
        assert_eq!(commands, vec![EffectCommand::Paint]);
        assert_eq!(effect.phase(), RevealPhase::Idle);
        assert!(effect.is_observing());

        effect.on_intersection(0.5);
        assert_eq!(effect.target(), "two");
        assert_eq!(effect.phase(), RevealPhase::Revealing);
    }

    #[test]
    fn test_unmount_releases_everything() {
        let mut effect = RevealEffect::immediate("long text", 10).unwrap();
        let token = started_token(&effect.mount());
        effect.on_tick(token);

        assert_eq!(effect.unmount(), vec![EffectCommand::CancelTimer { token }]);
        assert!(effect.active_timer().is_none());
        assert!(effect.on_tick(token).is_empty());
        assert_eq!(effect.displayed(), "l");

        // Second unmount and remount attempts are no-ops
        assert!(effect.unmount().is_empty());
        assert!(effect.mount().is_empty());
        assert!(effect.retarget("other").is_empty());
    }

    #[test]
    fn test_unmount_idle_gated_effect_disconnects() {
        let mut effect = RevealEffect::on_visible("text", 10, 0.1).unwrap();
        effect.mount();
        assert_eq!(effect.unmount(), vec![EffectCommand::Disconnect]);
        assert!(!effect.is_observing());
        assert!(effect.on_intersection(1.0).is_empty());
        assert_eq!(effect.displayed(), "");
    }

    #[test]
    fn test_trigger_attr() {
        assert_eq!(Trigger::Immediate.as_attr(), "immediate");
        assert_eq!(Trigger::OnVisible { threshold: 0.1 }.as_attr(), "visible");
    }
}
