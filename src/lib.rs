//! canopy - list a directory tree as plain text, JSON or XML

pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::{OutputFormat, TreeConfig};
pub use error::{TreeError, TreeResult};
pub use output::{
    JsonFormatter, NodeFormatter, PlainFormatter, RenderNode, XmlFormatter, format_tree,
    print_tree, render, write_root_error, write_tree,
};
pub use tree::{BuiltTree, Tree, TreeNode, TreeSummary, TreeWalker, validate};
