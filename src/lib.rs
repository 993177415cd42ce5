#![forbid(unsafe_code)]
//! treefs — print a graph of a read-only filesystem the way the `tree` command does.

pub mod cli;
pub mod error;
pub mod report;
pub mod tree;
pub mod vfs;
