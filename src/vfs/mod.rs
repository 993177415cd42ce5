//! Read-only filesystem abstraction walked by the tree renderer.
//!
//! Paths handed to a [`ReadDirFs`] are slash-separated and relative to the
//! filesystem root, which is itself named `.`. Implementations return the
//! direct children of a directory sorted by name.

mod dir;
mod map;

use std::io;

pub use dir::DirFs;
pub use map::MapFs;

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Name of the entry (final path component only).
    pub name: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Path segment that addresses this entry in [`ReadDirFs::read_dir`].
    ///
    /// Equal to `name` unless the filesystem has to display a name it cannot
    /// address verbatim, such as an on-disk name that is not valid UTF-8.
    pub key: String,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        let name = name.into();
        Self {
            key: name.clone(),
            name,
            is_dir,
        }
    }
}

/// Abstraction over directory listing so the renderer can walk real disks
/// and in-memory trees alike.
pub trait ReadDirFs {
    /// List the direct children of `path`, sorted by name.
    ///
    /// Fails when `path` is invalid, does not exist, or is not a directory.
    fn read_dir(&self, path: &str) -> io::Result<Vec<Entry>>;
}

impl<T: ReadDirFs + ?Sized> ReadDirFs for &T {
    fn read_dir(&self, path: &str) -> io::Result<Vec<Entry>> {
        (**self).read_dir(path)
    }
}

impl<T: ReadDirFs + ?Sized> ReadDirFs for Box<T> {
    fn read_dir(&self, path: &str) -> io::Result<Vec<Entry>> {
        (**self).read_dir(path)
    }
}

/// Report whether `path` is a valid filesystem path.
///
/// `.` names the root. Anything else must be a non-empty sequence of
/// `/`-separated segments with no empty, `.` or `..` segment, and no leading
/// or trailing slash.
pub fn valid_path(path: &str) -> bool {
    if path == "." {
        return true;
    }
    !path.is_empty()
        && path
            .split('/')
            .all(|seg| !seg.is_empty() && seg != "." && seg != "..")
}

pub(crate) fn invalid_path(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("invalid path {path:?}"),
    )
}

pub(crate) fn not_a_directory() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "not a directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_marker_is_valid() {
        assert!(valid_path("."));
    }

    #[test]
    fn nested_paths_are_valid() {
        assert!(valid_path("a"));
        assert!(valid_path("a/b/c.txt"));
        assert!(valid_path(".hidden/x"));
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for bad in ["", "/a", "a/", "a//b", "./a", "a/./b", "../a", "a/.."] {
            assert!(!valid_path(bad), "{bad:?} should be invalid");
        }
    }
}
