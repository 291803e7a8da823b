//! Error types for composition stages.

use thiserror::Error;

/// Errors that can occur while composing a mixin into a target.
///
/// All variants are local to one (target, mixin) application; the
/// generation pass skips the application and continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// Type-parameter count does not match the supplied arguments.
    #[error("{power_up} declares {expected} type parameter(s) but {supplied} argument(s) were supplied")]
    ArityMismatch {
        power_up: String,
        expected: usize,
        supplied: usize,
    },

    /// The hook references a mixin the compilation does not declare.
    #[error("unknown power-up: {0}")]
    UnknownPowerUp(String),

    /// The mixin's stored source no longer parses as a declaration.
    #[error("power-up {0} source fragment failed to reparse")]
    UnparsableSource(String),
}

impl ComposeError {
    pub fn arity_mismatch(power_up: impl Into<String>, expected: usize, supplied: usize) -> Self {
        Self::ArityMismatch {
            power_up: power_up.into(),
            expected,
            supplied,
        }
    }
}
