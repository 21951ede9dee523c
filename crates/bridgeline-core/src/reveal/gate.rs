use super::RevealError;

/// Default share of the host region that must be on screen to open the gate.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Slack for ratios that browsers report a rounding error short of the
/// threshold they were crossing.
pub const RATIO_TOLERANCE: f64 = 1e-6;

/// One-shot visibility gate.
///
/// Opens the first time an observed intersection ratio reaches the threshold
/// (inclusive, within [`RATIO_TOLERANCE`]) and stays open forever after.
/// Once open, further observations are ignored, even if the region leaves and
/// re-enters the viewport.
#[derive(Clone, Debug)]
pub struct VisibilityGate {
    threshold: f64,
    open: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Result<Self, RevealError> {
        validate_threshold(threshold)?;
        Ok(Self {
            threshold,
            open: false,
        })
    }

    /// Feed an intersection ratio. Returns true only for the event that opens
    /// the gate.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.open {
            return false;
        }
        if ratio + RATIO_TOLERANCE >= self.threshold {
            self.open = true;
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Thresholds are intersection ratios, so they must lie in `[0, 1]`.
pub fn validate_threshold(threshold: f64) -> Result<(), RevealError> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(RevealError::ThresholdOutOfRange { threshold });
    }
    Ok(())
}
