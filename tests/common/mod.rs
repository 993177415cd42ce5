#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;
use treefs::tree::TreeConfig;
use treefs::vfs::MapFs;

/// Default TreeConfig: no hidden entries, files included, unlimited depth.
pub fn default_config() -> TreeConfig {
    TreeConfig::default()
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Relative paths of the `a` sample tree (three files, `b` with `d`, and `c`).
pub const SAMPLE_TREE: &[&str] = &[
    "a1.test",
    "a2.test",
    "a3.test",
    "b/b1.test",
    "b/b2.test",
    "b/b3.test",
    "b/d/d1.test",
    "c/c1.test",
    "c/c2.test",
];

/// The sample tree at the filesystem root.
pub fn sample_fs() -> MapFs {
    SAMPLE_TREE.iter().copied().collect()
}

/// The sample tree nested under `testdata/a`.
pub fn testdata_fs() -> MapFs {
    let mut fs = MapFs::new();
    for p in SAMPLE_TREE {
        fs.add(&format!("testdata/a/{p}"));
    }
    fs
}
