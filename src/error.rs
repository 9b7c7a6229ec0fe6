//! The advisory raised when a numeral's scale cannot be honored.

use core::fmt::{self, Display};

/// Non-fatal signal that the decimal exponent of a numeral exceeded the
/// supported magnitude and the returned value saturated.
///
/// The conversion still completes: the result is clamped toward `f64::MAX`
/// or toward zero depending on the exponent's sign, and the consumed span is
/// reported as usual. The advisory only tells the caller that the magnitude
/// was not achieved exactly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Advisory {
    /// The exponent was large and positive; the true value overflows a
    /// double and the result saturated toward `f64::MAX`.
    Overflow,

    /// The exponent was large and negative; the true value underflows a
    /// double and the result saturated toward zero.
    Underflow,
}

impl Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Advisory::Overflow => f.write_str("decimal exponent above supported range"),
            Advisory::Underflow => f.write_str("decimal exponent below supported range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Advisory {}
