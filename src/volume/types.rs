use serde::Serialize;

use crate::size::ByteSize;

/// Point-in-time capacity snapshot of one mounted volume.
///
/// Produced atomically by a single [`probe`](crate::volume::probe) call and
/// never mutated afterwards; `used + free == total` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeInfo {
    /// Total size of the volume in bytes
    pub(crate) total: u64,
    /// Used size of the volume in bytes
    pub(crate) used: u64,
    /// Free size of the volume in bytes
    pub(crate) free: u64,
    /// Total inodes available
    pub(crate) files: u64,
    /// Free inodes available
    pub(crate) ffree: u64,
    /// Filesystem type name, or `"UNKNOWN"`
    pub(crate) fs_type: String,
}

impl VolumeInfo {
    /// Total capacity in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.total
    }

    /// Free capacity in bytes.
    pub fn free_bytes(&self) -> u64 {
        self.free
    }

    /// Used capacity in bytes.
    pub fn used_bytes(&self) -> u64 {
        self.used
    }

    /// Total number of inodes on the volume.
    pub fn total_inodes(&self) -> u64 {
        self.files
    }

    /// Number of free inodes on the volume.
    pub fn free_inodes(&self) -> u64 {
        self.ffree
    }

    /// Filesystem type name, or `"UNKNOWN"` for an unmapped magic number.
    pub fn fs_type(&self) -> &str {
        &self.fs_type
    }

    /// Total capacity as a humanized string, e.g. `"931.51 GiB"`.
    pub fn total_display(&self) -> String {
        ByteSize::from_bytes(self.total as f64).to_string()
    }

    /// Free capacity as a humanized string.
    pub fn free_display(&self) -> String {
        ByteSize::from_bytes(self.free as f64).to_string()
    }

    /// Used capacity as a humanized string.
    pub fn used_display(&self) -> String {
        ByteSize::from_bytes(self.used as f64).to_string()
    }

    /// Used capacity as a percentage of total (0-100).
    pub fn usage_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        (self.used as f64 / self.total as f64) * 100.0
    }
}
