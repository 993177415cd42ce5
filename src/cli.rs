use clap::Parser;
use std::path::{Component, Path, PathBuf};

use crate::tree::TreeConfig;
use crate::vfs::DirFs;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treefs",
    version,
    about = "List the contents of directories in a tree-like format",
    after_help = "Examples:\n  treefs\n  treefs -L 2 src\n  treefs -da ../other-project"
)]
pub struct Args {
    /// Directories to list (default: current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Include entries whose names begin with a dot, except . .. and ...
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    pub dirs_only: bool,

    /// Print the full path prefix for each entry
    #[arg(short = 'f', long = "full-path")]
    pub full_path: bool,

    /// Max display depth of the directory tree (0 or less for unlimited)
    #[arg(short = 'L', long = "level", allow_negative_numbers = true, default_value_t = -1)]
    pub level: i64,

    /// Omit the directory and file count at the end of the listing
    #[arg(long = "noreport")]
    pub no_report: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Tree configuration shared by every listed root.
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            show_hidden: self.show_hidden,
            dirs_only: self.dirs_only,
            full_path: self.full_path,
            max_depth: None,
        }
        .with_level(self.level)
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Pick the filesystem and root name used to list `path`.
///
/// Plain relative paths are walked from the current directory so their name
/// can be addressed directly. Absolute paths, `.` and paths climbing above the
/// current directory get a filesystem rooted at the path itself.
pub fn root_for(path: &Path) -> (DirFs, String) {
    let name = path.to_string_lossy().into_owned();
    let rooted_at_self = path.is_absolute()
        || path
            .components()
            .all(|c| matches!(c, Component::CurDir))
        || path.components().any(|c| matches!(c, Component::ParentDir));

    if rooted_at_self {
        (DirFs::new(path), name)
    } else {
        (DirFs::new("."), name)
    }
}
