//! Storage Metrics - A Rust library for mounted-volume capacity metrics
//!
//! This crate provides a safe interface to the capacity statistics of
//! mounted filesystem volumes on Unix systems, together with a byte-quantity
//! value type for unit-aware arithmetic and human-friendly rendering of
//! storage sizes.
//!
//! # Features
//!
//! - **Volume probing**: total/used/free space and inode counts for any
//!   mounted volume, via a single `statfs(2)` call
//! - **Filesystem classification**: magic-number lookup for the common
//!   filesystem kinds, degrading to `"UNKNOWN"` for unmapped codes
//! - **Byte quantities**: conversion, comparison, arithmetic and
//!   bounded-precision rounding across the B..PiB unit lattice
//! - **Humanized display**: auto-scaling `"1.00 GiB"`-style rendering
//!
//! # Examples
//!
//! ```no_run
//! use storage_metrics::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let info = probe("/")?;
//!     println!(
//!         "{}: {} used of {} ({:.0}%)",
//!         info.fs_type(),
//!         info.used_display(),
//!         info.total_display(),
//!         info.usage_percentage(),
//!     );
//!
//!     let threshold = ByteSize::new(500.0, "GiB")?;
//!     let free = ByteSize::from_bytes(info.free_bytes() as f64);
//!     if free.compare(&threshold).is_lt() {
//!         println!("less than {} left", threshold);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! The crate uses a single [`Error`] type covering its three failure modes:
//!
//! ```
//! use storage_metrics::{size::ByteSize, Error};
//!
//! // Negative magnitudes are rejected at construction.
//! assert!(matches!(ByteSize::new(-1.0, "GiB"), Err(Error::InvalidMagnitude(_))));
//!
//! // Unit symbols outside the table are rejected at construction and
//! // at explicit conversion.
//! assert!(matches!(ByteSize::from_bytes(1.0).convert_to("GB"), Err(Error::UnknownUnit(_))));
//! ```
//!
//! A failed native call surfaces as [`Error::VolumeStat`] wrapping the
//! underlying I/O error, without retries or partial results.
//!
//! # Thread Safety
//!
//! [`size::ByteSize`] and [`volume::VolumeInfo`] are immutable values with
//! no shared state and are safe to share across threads. [`volume::probe`]
//! performs one blocking system call per invocation and holds no resource
//! beyond the call's duration; concurrent probes are independent.

#![doc(html_root_url = "https://docs.rs/storage-metrics/0.1.0")]

pub mod error;
pub mod size;
pub mod volume;

pub use error::{Error, Result};

/// Re-export of the commonly used types for convenience
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::size::{ByteSize, SizeUnit};
    pub use crate::volume::{probe, VolumeInfo};
}
