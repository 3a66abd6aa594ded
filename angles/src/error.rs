//! Error type for the fallible parts of the crate.
//!
//! Trigonometric functions never return an error: a point outside a function's domain yields `None`.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AngleError>;

/// Errors returned by checked construction, checked arithmetic and parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    /// A checked constructor was given NaN or an infinity.
    #[error("angle value {value} is not finite")]
    NonFinite {
        /// The rejected value.
        value: f64,
    },

    /// `checked_div` was called with a zero divisor.
    #[error("cannot divide an angle by zero")]
    DivisionByZero,

    /// Text could not be read as an angle.
    #[error("cannot parse {input:?} as an angle: {reason}")]
    Parse {
        /// The text that was rejected.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Unknown name for [`crate::Mode`].
    #[error("unknown angle mode {0:?}, expected \"degrees\" or \"radians\"")]
    UnknownMode(String),

    /// Unknown name for [`crate::DisplayStyle`].
    #[error("unknown display style {0:?}, expected \"readable\" or \"decimal\"")]
    UnknownDisplay(String),
}
