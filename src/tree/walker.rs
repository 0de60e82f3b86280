//! TreeWalker - builds the full tree in memory before anything is rendered

use std::path::Path;

use tracing::debug;

use crate::config::TreeConfig;
use crate::error::TreeResult;

use super::entries::{prepare_listing, read_entries};
use super::filter::EntryFilter;
use super::metadata::EntryMetadata;
use super::node::{NodeId, Tree, TreeNode, TreeSummary};
use super::probe::validate;

/// A finished tree together with its totals.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub tree: Tree,
    pub summary: TreeSummary,
}

/// Depth-first, single-threaded tree builder.
pub struct TreeWalker<'a> {
    config: &'a TreeConfig,
    filter: EntryFilter,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a TreeConfig) -> Self {
        Self {
            config,
            filter: EntryFilter::new(&config.ignore_patterns),
        }
    }

    /// Validate the configured root and build its tree.
    pub fn walk(&self) -> TreeResult<BuiltTree> {
        let metadata = validate(&self.config.root)?;
        self.build(&self.config.root, metadata)
    }

    /// Build the tree under an already validated root.
    ///
    /// Stops at the first directory that cannot be listed.
    pub fn build(&self, root: &Path, metadata: EntryMetadata) -> TreeResult<BuiltTree> {
        let mut tree = Tree::with_root(root, metadata);
        let root_id = tree.root();
        let summary = TreeSummary::for_root() + self.build_dir(&mut tree, root_id)?;
        Ok(BuiltTree { tree, summary })
    }

    /// Expand one directory and return what its subtree adds to the totals.
    fn build_dir(&self, tree: &mut Tree, id: NodeId) -> TreeResult<TreeSummary> {
        let path = tree.get(id).path.clone();
        debug!(path = %path.display(), depth = tree.get(id).depth, "reading directory");

        let listing = prepare_listing(
            read_entries(&path)?,
            &self.filter,
            self.config.dirs_only,
            self.config.sort_by_time,
        );
        let mut summary = listing.counts;

        tree.expand(id);
        let count = listing.display.len();
        for (i, entry) in listing.display.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let child = tree.push_child(id, path.join(&entry.name), entry.metadata, is_last);
            if self.should_descend(tree.get(child)) {
                summary += self.build_dir(tree, child)?;
            } else if tree.get(child).is_unreadable_dir() {
                debug!(path = %tree.get(child).path.display(), "not descending into unreadable directory");
            }
        }
        Ok(summary)
    }

    fn should_descend(&self, node: &TreeNode) -> bool {
        node.is_dir() && self.config.descends_to(node.depth) && node.metadata.is_readable()
    }
}
