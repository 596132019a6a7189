use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Name reported for magic numbers absent from the table.
pub const UNKNOWN_FS: &str = "UNKNOWN";

/// Known filesystem magic numbers, keyed by the lowercase hexadecimal form
/// of `statfs(2)`'s `f_type`.
static FS_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1021994", "TMPFS"),
        ("137d", "EXT"),
        ("4244", "HFS"),
        ("4d44", "MSDOS"),
        ("52654973", "REISERFS"),
        ("5346544e", "NTFS"),
        ("58465342", "XFS"),
        ("61756673", "AUFS"),
        ("6969", "NFS"),
        ("ef51", "EXT2OLD"),
        ("ef53", "EXT4"),
        ("f15f", "ecryptfs"),
        ("794c7630", "overlayfs"),
        ("2fc12fc1", "zfs"),
        ("ff534d42", "cifs"),
        ("53464846", "wslfs"),
    ])
});

/// Resolves a filesystem magic number to a human-readable name.
///
/// The table is a best-effort convenience, not a correctness boundary: an
/// unrecognized magic resolves to [`UNKNOWN_FS`] rather than failing.
pub fn fs_type_name(magic: i64) -> &'static str {
    FS_TYPES.get(format!("{magic:x}").as_str()).copied().unwrap_or(UNKNOWN_FS)
}
