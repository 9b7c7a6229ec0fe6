//! Fast, table-driven conversion of decimal text to doubles.
//!
//! The conversion reads the longest numeric prefix of a buffer (optional
//! blanks, an optional sign, digits with at most one decimal point, and an
//! optional `E`/`e` exponent field) and produces the nearest representable
//! `f64` together with the number of bytes consumed. Trailing non-numeric
//! text is not an error; it is simply left unconsumed.
//!
//! ```
//! let parsed = floatscan::from_str("  -0.5e3kg");
//! assert_eq!(parsed.value(), -500.0);
//! assert_eq!(parsed.len(), 8);
//! ```
//!
//! The mantissa is capped at 18 significant digits and scaled through a
//! precomputed table of binary powers of ten, trading strict round-to-nearest
//! in the last bit for speed. A numeral whose decimal exponent exceeds 511 in
//! magnitude still converts, to a finite value saturated in the direction the
//! exponent implies, and reports an [`Advisory`].

// FEATURES

#![cfg_attr(not(feature = "std"), no_std)]

// MODULES
mod algorithm;
mod digit;
mod error;
mod exponent;
mod parse;
mod powers;

// API
pub use crate::error::Advisory;
pub use crate::parse::{from_slice, from_str, Parsed};
