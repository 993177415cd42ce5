//! Connector and prefix strings for the tree graph.

const ELBOW: &str = "\u{2514}\u{2500}\u{2500}"; // └──
const TEE: &str = "\u{251c}\u{2500}\u{2500}"; // ├──

const PIPE: &str = "\u{2502}   "; // │
const SPACE: &str = "    ";

/// Connector for an entry: the last sibling gets the elbow.
fn connector(is_last: bool) -> &'static str {
    if is_last {
        ELBOW
    } else {
        TEE
    }
}

/// Format one graph line: `<prefix><connector> <name>`.
pub(super) fn entry_line(prefix: &str, is_last: bool, name: &str) -> String {
    format!("{}{} {}", prefix, connector(is_last), name)
}

/// Prefix inherited by the children of a directory.
///
/// A vertical bar continues only while later siblings of the directory follow.
pub(super) fn child_prefix(prefix: &str, is_last: bool) -> String {
    let mut out = String::with_capacity(prefix.len() + PIPE.len());
    out.push_str(prefix);
    out.push_str(if is_last { SPACE } else { PIPE });
    out
}
