//! Error types for color parsing and construction

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits (must be 6 after stripping '#')
    #[error("invalid hex color length: expected 6 digits, got {0}")]
    InvalidLength(usize),
    /// Something other than `0-9`, `a-f` or `A-F` was found
    #[error("invalid hex digits in {0:?}")]
    InvalidDigit(String),
    /// Channel failed to parse as a base-16 byte
    #[error("invalid hex channel: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for [`Color`](super::Color) construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    Parse(#[from] ParseColorError),
    /// An HSL component is NaN, infinite, or outside 0.0..=1.0
    #[error("HSL component '{component}' out of range 0..=1: {value}")]
    HslOutOfRange {
        /// One of 'h', 's', 'l'
        component: char,
        /// The offending value
        value: f64,
    },
    /// Target luminance is NaN or infinite
    #[error("target luminance must be a finite number, got {0}")]
    InvalidLuminance(f64),
}
