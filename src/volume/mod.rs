//! Mounted-volume capacity probing.
//!
//! [`probe`] issues one native `statfs(2)` call for a path and converts the
//! raw block and inode counts into an immutable [`VolumeInfo`] snapshot,
//! classifying the filesystem through the static magic-number table in
//! [`constants`]. Nothing is cached or retried: every call reflects a fresh
//! snapshot of the underlying volume, and concurrent calls are independent.
//!
//! # Examples
//!
//! ```no_run
//! use storage_metrics::volume;
//!
//! fn main() -> storage_metrics::Result<()> {
//!     let info = volume::probe("/")?;
//!     println!("{} on /: {} used of {}", info.fs_type(), info.used_display(), info.total_display());
//!     Ok(())
//! }
//! ```

pub mod constants;

mod types;


pub use constants::fs_type_name;
pub use types::VolumeInfo;

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;

use tracing::debug;

use crate::error::{Error, Result};

/// Probes the mounted volume that `path` resolves to.
///
/// Blocks for the duration of one `statfs(2)` call and holds no resource
/// afterwards. Fails with [`Error::VolumeStat`] wrapping the underlying I/O
/// error when the native call fails (non-existent path, permission denied,
/// path not on a mounted filesystem); no partial snapshot is returned. An
/// unrecognized filesystem magic number is not an error: the snapshot
/// carries `"UNKNOWN"` and the sizes stay usable.
pub fn probe(path: &str) -> Result<VolumeInfo> {
    let c_path = CString::new(path)
        .map_err(|_| Error::volume_stat(path, io::Error::from(io::ErrorKind::InvalidInput)))?;

    let mut stat = MaybeUninit::<libc::statfs>::uninit();
    let rc = unsafe { libc::statfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(Error::volume_stat(path, io::Error::last_os_error()));
    }

    let stat = unsafe { stat.assume_init() };

    let block_size = stat.f_bsize as u64;
    let total = stat.f_blocks as u64 * block_size;
    let free = stat.f_bfree as u64 * block_size;

    let info = VolumeInfo {
        total,
        used: total.saturating_sub(free),
        free,
        files: stat.f_files as u64,
        ffree: stat.f_ffree as u64,
        fs_type: fs_type_name(stat.f_type as i64).to_string(),
    };

    debug!(
        path,
        fs_type = info.fs_type.as_str(),
        total = info.total,
        free = info.free,
        "probed volume statistics"
    );

    Ok(info)
}
