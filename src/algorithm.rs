//! Numeric assembly of a scanned mantissa and exponent.

use crate::digit::to_digit;
use crate::error::Advisory;
use crate::powers::{MAX_EXPONENT, POW10_BINARY};

// ACCUMULATION
// ------------

/// Most significant digits folded into the accumulators. Later digits cannot
/// change the accumulated value; their magnitude survives through the
/// exponent instead.
pub(crate) const MAX_DIGITS: usize = 18;

/// Fold the leading `count` digits of a mantissa run into a double.
///
/// * `run`   - Bytes spanning the digits and at most one decimal point.
/// * `count` - Digits to fold, at most `MAX_DIGITS`.
///
/// The digits are collected into two 9-digit integer accumulators combined
/// as `hi * 1e9 + lo`, which is faster and loses less precision than folding
/// digit-by-digit in floating point.
pub(crate) fn accumulate(run: &[u8], count: usize) -> f64 {
    let mut digits = run.iter().copied().filter_map(to_digit).take(count);
    let mut hi: u32 = 0;
    for digit in digits.by_ref().take(count.saturating_sub(9)) {
        hi = 10 * hi + digit;
    }
    let mut lo: u32 = 0;
    for digit in digits {
        lo = 10 * lo + digit;
    }
    (1.0e9 * hi as f64) + lo as f64
}

// SCALING
// -------

/// Scale the accumulated mantissa by `10^exp`.
///
/// The power is built by binary decomposition of the exponent's bits against
/// the `POW10_BINARY` table. A magnitude past `MAX_EXPONENT` is clamped and
/// reported through the advisory; the result then saturates toward zero or
/// toward `f64::MAX` rather than reaching the true magnitude. The returned
/// value is always finite and never NaN.
pub(crate) fn scale(fraction: f64, exp: i32) -> (f64, Option<Advisory>) {
    let negative = exp < 0;
    let mut exp = exp.unsigned_abs();
    let mut advisory = None;
    if exp > MAX_EXPONENT as u32 {
        exp = MAX_EXPONENT as u32;
        advisory = Some(if negative {
            Advisory::Underflow
        } else {
            Advisory::Overflow
        });
    }

    // A zero mantissa scales to zero at any exponent; skipping the multiply
    // also keeps 0 * inf from manufacturing a NaN.
    if fraction == 0.0 {
        return (fraction, advisory);
    }

    let mut dbl_exp = 1.0;
    for power in POW10_BINARY {
        if exp == 0 {
            break;
        }
        if exp & 1 != 0 {
            dbl_exp *= power;
        }
        exp >>= 1;
    }

    let value = if negative {
        fraction / dbl_exp
    } else {
        fraction * dbl_exp
    };
    if value.is_infinite() {
        // 10^511 already overflows a double on its own; keep the contract
        // finite and let the advisory carry the direction.
        return (f64::MAX, advisory);
    }
    (value, advisory)
}

// TESTS
// -----
