use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{invalid_path, not_a_directory, valid_path, Entry, ReadDirFs};

/// Separates the display form of an undecodable name from its alias number.
/// NUL never occurs in on-disk names, so aliased keys cannot clash with real ones.
const ALIAS_MARK: char = '\0';

/// Read-only view of a directory on the local disk.
///
/// Symbolic links below the root are listed but not followed, so a link to a
/// directory shows up as a plain entry.
///
/// Names that are not valid UTF-8 are displayed lossily and handed out with an
/// alias key; the alias maps back to the exact on-disk path.
#[derive(Debug, Clone)]
pub struct DirFs {
    root: PathBuf,
    // fs path of an aliased entry -> on-disk path
    aliases: RefCell<HashMap<String, PathBuf>>,
}

impl DirFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            aliases: RefCell::new(HashMap::new()),
        }
    }

    /// The on-disk directory this filesystem is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        if path == "." {
            return Ok(self.root.clone());
        }

        let aliases = self.aliases.borrow();
        let mut full = self.root.clone();
        let mut walked = String::with_capacity(path.len());
        for seg in path.split('/') {
            if !walked.is_empty() {
                walked.push('/');
            }
            walked.push_str(seg);

            if seg.contains(ALIAS_MARK) {
                full = aliases.get(&walked).cloned().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotFound, "file does not exist")
                })?;
            } else {
                full.push(seg);
            }
        }
        Ok(full)
    }

    fn alias(&self, parent: &str, display: &str, on_disk: PathBuf) -> String {
        let mut aliases = self.aliases.borrow_mut();
        let key = format!("{display}{ALIAS_MARK}{}", aliases.len());
        let path = if parent == "." {
            key.clone()
        } else {
            format!("{parent}/{key}")
        };
        aliases.insert(path, on_disk);
        key
    }
}

impl ReadDirFs for DirFs {
    fn read_dir(&self, path: &str) -> io::Result<Vec<Entry>> {
        if !valid_path(path) {
            return Err(invalid_path(path));
        }

        let full = self.resolve(path)?;
        if !std::fs::metadata(&full)?.is_dir() {
            return Err(not_a_directory());
        }

        let walker = WalkDir::new(&full)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            let is_dir = entry.file_type().is_dir();
            let listed = match entry.file_name().to_str() {
                Some(name) => Entry::new(name, is_dir),
                None => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    let key = self.alias(path, &name, entry.into_path());
                    Entry { name, is_dir, key }
                }
            };
            entries.push(listed);
        }
        Ok(entries)
    }
}
