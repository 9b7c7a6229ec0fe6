//! Scanner for the leading decimal numeral of a buffer.

use crate::algorithm::{accumulate, scale, MAX_DIGITS};
use crate::digit::{is_space, to_digit};
use crate::error::Advisory;
use crate::exponent::{combine, fractional_exponent};
use core::cmp;

// OUTCOME
// -------

/// The outcome of a conversion: the value, the span consumed to produce it,
/// and the optional range advisory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parsed {
    value: f64,
    len: usize,
    advisory: Option<Advisory>,
}

impl Parsed {
    /// The converted double, with the numeral's sign applied.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of leading bytes that belonged to the numeral, counting any
    /// leading blanks. Zero when the input held no digits at all, even if a
    /// sign or decimal point was scanned along the way.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing numeric was found.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The range advisory, present when the numeral's decimal exponent
    /// exceeded the supported magnitude and the value saturated.
    pub fn advisory(&self) -> Option<Advisory> {
        self.advisory
    }
}

// SCANNING
// --------

/// Measurements of a mantissa run.
///
/// * `digits` - Total digits scanned.
/// * `dec_pt` - Digits ahead of the decimal point, or `digits` if none.
/// * `span`   - Bytes covered by the run, digits plus at most one point.
struct MantissaRun {
    digits: usize,
    dec_pt: usize,
    span: usize,
}

/// Measure the maximal run of digits and at most one decimal point.
fn mantissa_run(bytes: &[u8]) -> MantissaRun {
    let mut digits = 0;
    let mut dec_pt = None;
    let mut span = 0;
    for &c in bytes {
        if to_digit(c).is_some() {
            digits += 1;
        } else if c == b'.' && dec_pt.is_none() {
            dec_pt = Some(digits);
        } else {
            break;
        }
        span += 1;
    }
    MantissaRun {
        digits,
        dec_pt: dec_pt.unwrap_or(digits),
        span,
    }
}

/// Scan an exponent field at the head of `bytes`: an `E`/`e` marker, an
/// optional sign, then digits. Returns the accumulated magnitude, its sign,
/// and the bytes consumed. A marker with no digit behind it consumes
/// nothing; the mantissa then stands alone.
fn exponent_run(bytes: &[u8]) -> (i32, bool, usize) {
    let mut pos = 0;
    match bytes.get(pos).copied() {
        Some(b'E' | b'e') => pos += 1,
        _ => return (0, false, 0),
    }
    let negative = match bytes.get(pos).copied() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut exp: i32 = 0;
    while let Some(digit) = bytes.get(pos).copied().and_then(to_digit) {
        exp = exp.saturating_mul(10).saturating_add(digit as i32);
        pos += 1;
    }
    if pos == digits_start {
        return (0, false, 0);
    }
    (exp, negative, pos)
}

// ENTRY POINTS
// ------------

/// Convert the leading decimal numeral of `bytes` into a double.
///
/// Leading blanks and an optional sign are scanned first, then digits with
/// at most one decimal point and an optional exponent field. Bytes past the
/// numeral are ignored; [`Parsed::len`] reports where they begin. An input
/// with no digits converts to `0.0` with nothing consumed.
pub fn from_slice(bytes: &[u8]) -> Parsed {
    let mut pos = 0;
    while let Some(&c) = bytes.get(pos) {
        if !is_space(c) {
            break;
        }
        pos += 1;
    }
    let negative = match bytes.get(pos).copied() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let run = mantissa_run(&bytes[pos..]);
    if run.digits == 0 {
        // No digit backs whatever was scanned, so none of it counts, the
        // sign and any lone point included.
        return Parsed {
            value: 0.0,
            len: 0,
            advisory: None,
        };
    }
    let run_bytes = &bytes[pos..pos + run.span];
    pos += run.span;

    let fraction = accumulate(run_bytes, cmp::min(run.digits, MAX_DIGITS));
    let frac_exp = fractional_exponent(run.dec_pt, run.digits);

    let (explicit, explicit_negative, consumed) = exponent_run(&bytes[pos..]);
    pos += consumed;

    let (value, advisory) = scale(fraction, combine(frac_exp, explicit, explicit_negative));
    Parsed {
        value: if negative { -value } else { value },
        len: pos,
        advisory,
    }
}

/// Convert the leading decimal numeral of `s` into a double.
///
/// Equivalent to [`from_slice`] on the string's bytes.
pub fn from_str(s: &str) -> Parsed {
    from_slice(s.as_bytes())
}

// TESTS
// -----
