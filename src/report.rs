//! The rendered tree and its summary line.

use std::fmt;

/// Result of rendering one or more roots.
///
/// Lines are already formatted with connectors and prefixes; the first line
/// of each root is the root name itself. Reports are immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeReport {
    lines: Vec<String>,
    dir_count: usize,
    file_count: usize,
    path_prefix_hint: Option<String>,
    dirs_only: bool,
}

impl TreeReport {
    pub(crate) fn new(
        lines: Vec<String>,
        dir_count: usize,
        file_count: usize,
        path_prefix_hint: Option<String>,
        dirs_only: bool,
    ) -> Self {
        Self {
            lines,
            dir_count,
            file_count,
            path_prefix_hint,
            dirs_only,
        }
    }

    /// Concatenate another root's graph after this one and pool the counts.
    pub(crate) fn append(&mut self, other: TreeReport) {
        self.lines.extend(other.lines);
        self.dir_count += other.dir_count;
        self.file_count += other.file_count;
    }

    /// Graph lines in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of directories shown in the graph.
    pub fn dir_count(&self) -> usize {
        self.dir_count
    }

    /// Number of files shown in the graph.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Original root name when it pointed at `.`, above the filesystem root,
    /// or at an absolute location.
    pub fn path_prefix_hint(&self) -> Option<&str> {
        self.path_prefix_hint.as_deref()
    }

    /// Whether the summary omits the file clause.
    pub fn dirs_only(&self) -> bool {
        self.dirs_only
    }

    /// The graph without the summary.
    pub fn graph(&self) -> String {
        self.lines.join("\n")
    }

    /// The summary line, e.g. `3 directories, 1 file`.
    pub fn summary(&self) -> String {
        let dirs = if self.dir_count == 1 {
            "directory"
        } else {
            "directories"
        };
        if self.dirs_only {
            return format!("{} {}", self.dir_count, dirs);
        }

        let files = if self.file_count == 1 { "file" } else { "files" };
        format!("{} {}, {} {}", self.dir_count, dirs, self.file_count, files)
    }
}

/// Graph, a blank line, then the summary.
impl fmt::Display for TreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.graph(), self.summary())
    }
}
