//! Precomputed powers of ten for exponent assembly.

/// Largest decimal exponent magnitude the conversion honors. Any larger
/// exponent already overflows or underflows a double, so additional digits
/// cannot change the outcome and the magnitude is clamped here.
pub(crate) const MAX_EXPONENT: i32 = 511;

/// Binary powers of ten: entry `i` holds `10^(2^i)`. Multiplying together the
/// entries selected by the set bits of an exponent builds `10^exp` for any
/// exponent up to `MAX_EXPONENT`.
pub(crate) const POW10_BINARY: [f64; 9] = [
    10.0,
    100.0,
    1.0e4,
    1.0e8,
    1.0e16,
    1.0e32,
    1.0e64,
    1.0e128,
    1.0e256,
];
