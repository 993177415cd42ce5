use tracing::trace;

use super::layout::{child_prefix, entry_line};
use super::TreeConfig;
use crate::error::ListError;
use crate::vfs::{Entry, ReadDirFs};

/// Names that are never treated as hidden even though they start with a dot.
const DOT_MARKERS: &[&str] = &[".", "..", "..."];

/// Lines and counts produced by walking one directory.
#[derive(Debug, Default)]
pub(super) struct Subtree {
    pub lines: Vec<String>,
    pub dirs: usize,
    pub files: usize,
}

impl Subtree {
    fn absorb(&mut self, child: Subtree) {
        self.lines.extend(child.lines);
        self.dirs += child.dirs;
        self.files += child.files;
    }
}

/// Depth-first walk over a [`ReadDirFs`] with a fixed configuration.
pub(super) struct Walker<'a> {
    fs: &'a dyn ReadDirFs,
    config: &'a TreeConfig,
}

impl<'a> Walker<'a> {
    pub fn new(fs: &'a dyn ReadDirFs, config: &'a TreeConfig) -> Self {
        Self { fs, config }
    }

    /// Walk `dir` and everything below it.
    ///
    /// `display` is the path shown for `dir` when full paths are requested,
    /// `prefix` the continuation inherited from ancestors, and `depth` the
    /// level of `dir`'s children (0 for the root's children).
    pub fn walk(
        &self,
        dir: &str,
        display: &str,
        prefix: &str,
        depth: usize,
    ) -> Result<Subtree, ListError> {
        trace!(dir, depth, "listing directory");
        let entries = self
            .fs
            .read_dir(dir)
            .map_err(|e| ListError::new(dir, e))?;

        let visible: Vec<Entry> = entries.into_iter().filter(|e| self.allow(e)).collect();
        let mut subtree = Subtree::default();

        for (i, entry) in visible.iter().enumerate() {
            let is_last = i + 1 == visible.len();
            // Full paths are only spelled out when they are displayed.
            let shown = self
                .config
                .full_path
                .then(|| format!("{}/{}", display, entry.name));
            let name = shown.as_deref().unwrap_or(entry.name.as_str());
            subtree.lines.push(entry_line(prefix, is_last, name));

            if !entry.is_dir {
                subtree.files += 1;
                continue;
            }
            subtree.dirs += 1;

            if !self.config.descends_to(depth + 1) {
                continue;
            }
            let child_dir = join(dir, &entry.key);
            let child = self.walk(
                &child_dir,
                shown.as_deref().unwrap_or(display),
                &child_prefix(prefix, is_last),
                depth + 1,
            )?;
            subtree.absorb(child);
        }

        Ok(subtree)
    }

    /// Filter policy: hidden entries and, in directories-only mode, files are dropped.
    fn allow(&self, entry: &Entry) -> bool {
        if !self.config.show_hidden && is_hidden(&entry.name) {
            return false;
        }
        !(self.config.dirs_only && !entry.is_dir)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && !DOT_MARKERS.contains(&name)
}

/// Join a child name onto a filesystem path, collapsing the `.` root.
fn join(dir: &str, name: &str) -> String {
    if dir == "." {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
