use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// The fixed lattice of binary storage units, smallest to largest.
///
/// Each step is a factor of 1024. The discriminant doubles as the unit's
/// position in the lattice, so ordering comparisons follow magnitude
/// granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SizeUnit {
    /// Bytes
    B,
    /// Kibibytes (1024 B)
    KiB,
    /// Mebibytes (1024 KiB)
    MiB,
    /// Gibibytes (1024 MiB)
    GiB,
    /// Tebibytes (1024 GiB)
    TiB,
    /// Pebibytes (1024 TiB)
    PiB,
}

impl SizeUnit {
    /// All units in lattice order.
    pub const ALL: [SizeUnit; 6] =
        [SizeUnit::B, SizeUnit::KiB, SizeUnit::MiB, SizeUnit::GiB, SizeUnit::TiB, SizeUnit::PiB];

    /// Position in the lattice, 0 (B) through 5 (PiB).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of bytes represented by one of this unit.
    pub fn factor(self) -> f64 {
        1024f64.powi(self.index() as i32)
    }

    /// Canonical symbol, e.g. `"GiB"`.
    pub fn symbol(self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KiB => "KiB",
            SizeUnit::MiB => "MiB",
            SizeUnit::GiB => "GiB",
            SizeUnit::TiB => "TiB",
            SizeUnit::PiB => "PiB",
        }
    }

    /// Looks up a unit by its symbol, ignoring ASCII case.
    pub fn from_symbol(symbol: &str) -> Result<SizeUnit> {
        SizeUnit::ALL
            .into_iter()
            .find(|unit| symbol.eq_ignore_ascii_case(unit.symbol()))
            .ok_or_else(|| Error::unknown_unit(symbol))
    }

    /// The finer-grained (smaller-magnitude) of two units.
    pub(crate) fn finer(self, other: SizeUnit) -> SizeUnit {
        if self <= other {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
