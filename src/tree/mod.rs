//! Tree rendering: walking a filesystem into a [`TreeReport`].

mod layout;
pub(crate) mod walk;

use tracing::debug;

use crate::error::ListError;
use crate::report::TreeReport;
use crate::vfs::ReadDirFs;
use walk::Walker;

/// Configuration for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Whether to include hidden entries (names starting with a dot).
    pub show_hidden: bool,
    /// Whether to show only directories.
    pub dirs_only: bool,
    /// Whether to print each entry as its full path from the root.
    pub full_path: bool,
    /// Maximum display depth (`None` or `Some(0)` for unlimited).
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    /// Set the maximum depth from a signed level; values `<= 0` disable the limit.
    pub fn with_level(mut self, level: i64) -> Self {
        self.max_depth = usize::try_from(level).ok().filter(|&l| l > 0);
        self
    }

    /// Whether a directory whose children sit at `depth` may be listed.
    fn descends_to(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max) if max > 0 => depth < max,
            _ => true,
        }
    }
}

/// One root of a multi-root render.
pub struct Arg<'a> {
    pub fs: &'a dyn ReadDirFs,
    pub name: String,
    pub config: TreeConfig,
}

impl<'a> Arg<'a> {
    pub fn new(fs: &'a dyn ReadDirFs, name: impl Into<String>) -> Self {
        Self {
            fs,
            name: name.into(),
            config: TreeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }
}

/// Where the walk starts and how full paths are spelled.
#[derive(Debug, PartialEq, Eq)]
struct Root {
    /// Path handed to the filesystem for the top-level listing.
    walk: String,
    /// Name recorded for `.`, parent-relative and absolute roots.
    hint: Option<String>,
    /// Path prepended to entries in full-path mode.
    display: String,
}

impl Root {
    fn resolve(name: &str) -> Self {
        let trimmed = name.trim_end_matches('/');
        // The filesystem cannot address anything above its own root, so those
        // names are walked from `.` and kept only for display.
        let above_root = name.starts_with('/')
            || trimmed == "."
            || trimmed.split('/').any(|seg| seg == "..");

        if above_root {
            return Self {
                walk: ".".to_string(),
                hint: Some(trimmed.to_string()),
                display: trimmed.to_string(),
            };
        }

        let walk = trimmed
            .split('/')
            .filter(|seg| !seg.is_empty() && *seg != ".")
            .collect::<Vec<_>>()
            .join("/");
        Self {
            walk: if walk.is_empty() && !trimmed.is_empty() {
                ".".to_string()
            } else {
                walk
            },
            hint: None,
            display: trimmed.to_string(),
        }
    }
}

/// Render the tree of `fs` rooted at `name`.
///
/// The first line is `name` as given; every displayed entry follows in
/// depth-first order. Any listing failure aborts the render.
pub fn render(
    fs: &dyn ReadDirFs,
    name: &str,
    config: &TreeConfig,
) -> Result<TreeReport, ListError> {
    let root = Root::resolve(name);
    debug!(root = name, walk = %root.walk, ?config, "rendering tree");

    let subtree = Walker::new(fs, config).walk(&root.walk, &root.display, "", 0)?;

    let mut lines = Vec::with_capacity(subtree.lines.len() + 1);
    lines.push(name.to_string());
    lines.extend(subtree.lines);

    debug!(
        root = name,
        dirs = subtree.dirs,
        files = subtree.files,
        "rendered tree"
    );
    Ok(TreeReport::new(
        lines,
        subtree.dirs,
        subtree.files,
        root.hint,
        config.dirs_only,
    ))
}

/// Render each root in order and pool the results.
///
/// Graphs are concatenated one after another and counts are summed. The first
/// failing root aborts the whole batch.
pub fn render_all(args: &[Arg<'_>]) -> Result<TreeReport, ListError> {
    debug!(roots = args.len(), "rendering aggregate");
    let dirs_only = !args.is_empty() && args.iter().all(|arg| arg.config.dirs_only);

    let mut report = TreeReport::new(Vec::new(), 0, 0, None, dirs_only);
    for arg in args {
        let part = render(arg.fs, &arg.name, &arg.config)?;
        report.append(part);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_root_walks_itself() {
        let root = Root::resolve("testdata/a");
        assert_eq!(root.walk, "testdata/a");
        assert_eq!(root.hint, None);
        assert_eq!(root.display, "testdata/a");
    }

    #[test]
    fn current_dir_is_recorded_as_hint() {
        let root = Root::resolve(".");
        assert_eq!(root.walk, ".");
        assert_eq!(root.hint.as_deref(), Some("."));
    }

    #[test]
    fn parent_relative_root_walks_current_dir() {
        let root = Root::resolve("../../treefs");
        assert_eq!(root.walk, ".");
        assert_eq!(root.hint.as_deref(), Some("../../treefs"));
        assert_eq!(root.display, "../../treefs");
    }

    #[test]
    fn dotted_names_are_not_parent_references() {
        let root = Root::resolve("a..b/c");
        assert_eq!(root.walk, "a..b/c");
        assert_eq!(root.hint, None);
    }

    #[test]
    fn absolute_root_walks_current_dir() {
        let root = Root::resolve("/srv/data/");
        assert_eq!(root.walk, ".");
        assert_eq!(root.hint.as_deref(), Some("/srv/data"));
    }

    #[test]
    fn trailing_slash_and_leading_dot_are_normalised() {
        let root = Root::resolve("./src/");
        assert_eq!(root.walk, "src");
        assert_eq!(root.display, "./src");
        assert_eq!(root.hint, None);
    }

    #[test]
    fn level_zero_or_negative_is_unlimited() {
        assert_eq!(TreeConfig::default().with_level(0).max_depth, None);
        assert_eq!(TreeConfig::default().with_level(-1).max_depth, None);
        assert_eq!(TreeConfig::default().with_level(3).max_depth, Some(3));
    }

    #[test]
    fn depth_limit_stops_at_max() {
        let config = TreeConfig {
            max_depth: Some(2),
            ..TreeConfig::default()
        };
        assert!(config.descends_to(1));
        assert!(!config.descends_to(2));
        assert!(TreeConfig::default().descends_to(1_000));
    }
}
