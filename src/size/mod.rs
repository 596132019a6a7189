//! Byte-quantity values with unit-aware conversion, arithmetic and rendering.
//!
//! [`ByteSize`] is an immutable non-negative magnitude tagged with one of the
//! six binary units in [`SizeUnit`]. Every operation that changes unit or
//! magnitude returns a new value or a plain numeric result; nothing mutates
//! in place, so values can be shared freely across threads.
//!
//! # Examples
//!
//! ```
//! use storage_metrics::size::ByteSize;
//!
//! fn main() -> storage_metrics::Result<()> {
//!     let size = ByteSize::from_bytes(1_073_741_824.0);
//!     assert_eq!(size.to_string(), "1.00 GiB");
//!
//!     let in_mib = size.convert_to("MiB")?;
//!     assert_eq!(in_mib.round(0), 1024.0);
//!     Ok(())
//! }
//! ```

mod units;


pub use units::SizeUnit;

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// Decimal digits beyond which `f64` cannot represent a decimal fraction
/// reliably. Rounding precision is clamped here.
const FLOAT_DIGITS: u32 = 15;

fn clamp_precision(precision: u32) -> u32 {
    precision.min(FLOAT_DIGITS)
}

/// An immutable byte quantity: a non-negative magnitude tagged with a unit.
///
/// Supports power-of-1024 conversion, total-order comparison, arithmetic in
/// the finer-grained operand unit, bounded-precision rounding, and an
/// auto-scaling human-readable form via [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByteSize {
    size: f64,
    unit: SizeUnit,
}

impl ByteSize {
    /// Creates a quantity from a magnitude and a unit symbol.
    ///
    /// The symbol lookup ignores ASCII case. Fails with
    /// [`Error::InvalidMagnitude`] for a negative magnitude and
    /// [`Error::UnknownUnit`] for a symbol outside the unit table.
    pub fn new(size: f64, unit: &str) -> Result<ByteSize> {
        if size < 0.0 {
            return Err(Error::InvalidMagnitude(size));
        }

        Ok(ByteSize { size, unit: SizeUnit::from_symbol(unit)? })
    }

    /// Creates a quantity in the base unit (bytes).
    ///
    /// Non-failing convenience for raw byte counts; a negative input is
    /// clamped to zero to uphold the non-negative invariant.
    pub fn from_bytes(size: f64) -> ByteSize {
        ByteSize { size: size.max(0.0), unit: SizeUnit::B }
    }

    /// The unit this quantity is expressed in.
    pub fn unit(&self) -> SizeUnit {
        self.unit
    }

    /// Rescales into `unit` without a table lookup. Internal conversions
    /// stay within the lattice and cannot fail.
    fn convert(&self, unit: SizeUnit) -> ByteSize {
        if unit == self.unit {
            return *self;
        }

        let delta = unit.index() as i32 - self.unit.index() as i32;
        let size = if delta > 0 {
            self.size / 1024f64.powi(delta)
        } else {
            self.size * 1024f64.powi(-delta)
        };

        ByteSize { size, unit }
    }

    /// Returns this quantity re-expressed in the unit named by `unit`.
    ///
    /// The magnitude is rescaled by `1024^Δindex`. Converting to the
    /// quantity's own unit returns an equal value. Fails with
    /// [`Error::UnknownUnit`] for an unrecognized symbol.
    pub fn convert_to(&self, unit: &str) -> Result<ByteSize> {
        Ok(self.convert(SizeUnit::from_symbol(unit)?))
    }

    /// The magnitude truncated to `precision` decimal digits.
    ///
    /// Precision above 15 digits is silently clamped.
    pub fn truncate(&self, precision: u32) -> f64 {
        let scale = 10f64.powi(clamp_precision(precision) as i32);
        (self.size * scale).floor() / scale
    }

    /// The magnitude rounded half-up to `precision` decimal digits.
    ///
    /// Precision above 15 digits is silently clamped.
    pub fn round(&self, precision: u32) -> f64 {
        let scale = 10f64.powi(clamp_precision(precision) as i32);
        (self.size * scale + 0.5).floor() / scale
    }

    /// Compares true magnitudes, regardless of each operand's stored unit.
    ///
    /// Both operands are rescaled to bytes first; the result is a total
    /// order.
    pub fn compare(&self, other: &ByteSize) -> Ordering {
        let lhs = self.convert(SizeUnit::B);
        let rhs = other.convert(SizeUnit::B);
        lhs.size.total_cmp(&rhs.size)
    }

    /// Adds two quantities in the finer-grained of their two units.
    ///
    /// The raw `(magnitude, unit)` pair is returned instead of a
    /// [`ByteSize`], so further use requires explicit re-construction.
    pub fn add(&self, other: &ByteSize) -> (f64, SizeUnit) {
        let unit = self.unit.finer(other.unit);
        (self.convert(unit).size + other.convert(unit).size, unit)
    }

    /// Subtracts in the finer-grained of the two units, returning the
    /// absolute difference.
    ///
    /// The result is order-independent: `a.subtract(&b)` equals
    /// `b.subtract(&a)`, and which operand was larger is not signalled.
    pub fn subtract(&self, other: &ByteSize) -> (f64, SizeUnit) {
        let unit = self.unit.finer(other.unit);
        let difference = self.convert(unit).size - other.convert(unit).size;
        (difference.abs(), unit)
    }

    /// Re-expresses the quantity in the largest unit where its magnitude is
    /// still >= 1, applying the requested rounding mode at `precision`
    /// digits.
    ///
    /// A quantity below 1 in every unit (including zero) falls back to its
    /// own unit.
    pub fn friendly_convert(&self, precision: u32, truncate: bool) -> (f64, SizeUnit) {
        let bytes = self.convert(SizeUnit::B).size;
        let unit = SizeUnit::ALL
            .into_iter()
            .rev()
            .find(|unit| bytes / unit.factor() >= 1.0)
            .unwrap_or(self.unit);

        let converted = self.convert(unit);
        let size = if truncate { converted.truncate(precision) } else { converted.round(precision) };
        (size, unit)
    }
}

/// Renders the friendly auto-scaled form with two rounded decimals, e.g.
/// `"1.00 GiB"`.
impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (size, unit) = self.friendly_convert(2, false);
        write!(f, "{size:.2} {unit}")
    }
}
