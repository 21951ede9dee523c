pub mod effect;
pub mod gate;
pub mod typewriter;

pub use effect::*;
pub use gate::*;
pub use typewriter::*;

use thiserror::Error;

/// Errors raised when constructing a reveal effect.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RevealError {
    #[error("Reveal interval must be at least 1ms, got 0")]
    ZeroInterval,

    #[error("Visibility threshold {threshold} is outside [0, 1]")]
    ThresholdOutOfRange { threshold: f64 },
}
