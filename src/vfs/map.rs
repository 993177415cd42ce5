use std::collections::BTreeMap;
use std::io;

use super::{invalid_path, not_a_directory, valid_path, Entry, ReadDirFs};

/// In-memory filesystem keyed by slash paths.
///
/// A path ending in `/` is an (optionally empty) directory; any other path is
/// a file. Ancestor directories are created implicitly.
#[derive(Debug, Clone, Default)]
pub struct MapFs {
    // path -> is_dir
    nodes: BTreeMap<String, bool>,
}

impl MapFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn file(mut self, path: &str) -> Self {
        self.insert(path, false);
        self
    }

    /// Add a directory and its ancestors.
    pub fn dir(mut self, path: &str) -> Self {
        self.insert(path, true);
        self
    }

    /// Add `path` using the trailing-slash convention.
    pub fn add(&mut self, path: &str) {
        self.insert(path, path.ends_with('/'));
    }

    fn insert(&mut self, path: &str, is_dir: bool) {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();
        let Some((leaf, parents)) = segments.split_last() else {
            return;
        };

        let mut current = String::new();
        for seg in parents {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(seg);
            self.nodes.insert(current.clone(), true);
        }
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(leaf);
        self.nodes.insert(current, is_dir);
    }
}

impl<'a> FromIterator<&'a str> for MapFs {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut fs = MapFs::new();
        for path in iter {
            fs.add(path);
        }
        fs
    }
}

impl ReadDirFs for MapFs {
    fn read_dir(&self, path: &str) -> io::Result<Vec<Entry>> {
        if !valid_path(path) {
            return Err(invalid_path(path));
        }
        if path != "." {
            match self.nodes.get(path) {
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        "file does not exist",
                    ))
                }
                Some(false) => return Err(not_a_directory()),
                Some(true) => {}
            }
        }

        // Siblings share the parent prefix, so map order is name order.
        let entries = self
            .nodes
            .iter()
            .filter_map(|(key, &is_dir)| {
                let (parent, name) = key.rsplit_once('/').unwrap_or((".", key));
                (parent == path).then(|| Entry::new(name, is_dir))
            })
            .collect();
        Ok(entries)
    }
}
