//! Arena-owned tree of listed entries

use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

use super::metadata::EntryMetadata;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One filesystem entry.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Enclosing directory; `None` only for the root.
    pub parent: Option<NodeId>,
    /// `Some` iff this is a directory that was expanded (inside the depth
    /// limit and readable). Expanded empty directories hold an empty list.
    pub children: Option<Vec<NodeId>>,
    pub depth: usize,
    /// Last entry of the parent's display list.
    pub is_last: bool,
    pub path: PathBuf,
    pub metadata: EntryMetadata,
}

impl TreeNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    /// Directory whose mode denies owner-read; rendered with an error marker.
    pub fn is_unreadable_dir(&self) -> bool {
        self.is_dir() && !self.metadata.is_readable()
    }

    /// True when the node was expanded and has at least one child.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Final path component, or the whole path when there is none (e.g. `.` or `/`).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Directory and file totals for a tree or subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub directories: usize,
    pub files: usize,
}

impl TreeSummary {
    pub fn new(directories: usize, files: usize) -> Self {
        Self { directories, files }
    }

    /// Starting totals for a whole tree: the root directory itself.
    pub fn for_root() -> Self {
        Self::new(1, 0)
    }
}

impl Add for TreeSummary {
    type Output = TreeSummary;

    fn add(self, rhs: TreeSummary) -> TreeSummary {
        TreeSummary::new(self.directories + rhs.directories, self.files + rhs.files)
    }
}

impl AddAssign for TreeSummary {
    fn add_assign(&mut self, rhs: TreeSummary) {
        *self = *self + rhs;
    }
}

/// Nodes stored in pre-order; the root is always the first node.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    pub fn with_root(path: &Path, metadata: EntryMetadata) -> Self {
        Self {
            nodes: vec![TreeNode {
                parent: None,
                children: None,
                depth: 0,
                is_last: false,
                path: path.to_path_buf(),
                metadata,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of `id` in display order; empty for leaves.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children.as_deref().unwrap_or(&[])
    }

    /// Parent chain from the direct parent up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(id).parent, move |&p| self.get(p).parent)
    }

    /// Mark a directory as expanded so it owns a (possibly empty) child list.
    pub(crate) fn expand(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        if node.children.is_none() {
            node.children = Some(Vec::new());
        }
    }

    /// Append a child to an expanded node and return its id.
    pub(crate) fn push_child(
        &mut self,
        parent: NodeId,
        path: PathBuf,
        metadata: EntryMetadata,
        is_last: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.get(parent).depth + 1;
        self.nodes.push(TreeNode {
            parent: Some(parent),
            children: None,
            depth,
            is_last,
            path,
            metadata,
        });
        self.nodes[parent.0].children.get_or_insert_with(Vec::new).push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::metadata::EntryKind;

    fn dir() -> EntryMetadata {
        EntryMetadata::new(EntryKind::Directory, 0o755, None)
    }

    fn file() -> EntryMetadata {
        EntryMetadata::new(EntryKind::File, 0o644, None)
    }

    #[test]
    fn test_push_child_links_parent_and_depth() {
        let mut tree = Tree::with_root(Path::new("root"), dir());
        let root = tree.root();
        tree.expand(root);
        let src = tree.push_child(root, PathBuf::from("root/src"), dir(), false);
        tree.expand(src);
        let main = tree.push_child(src, PathBuf::from("root/src/main.rs"), file(), true);
        let readme = tree.push_child(root, PathBuf::from("root/README"), file(), true);

        assert_eq!(tree.children(root), &[src, readme]);
        assert_eq!(tree.children(src), &[main]);
        assert_eq!(tree.get(main).depth, 2);
        assert_eq!(tree.get(main).name(), "main.rs");
        assert!(tree.get(main).children.is_none());
        assert_eq!(tree.ancestors(main).collect::<Vec<_>>(), vec![src, root]);
        assert_eq!(tree.ancestors(root).count(), 0);
    }

    #[test]
    fn test_expanded_empty_directory_has_no_children() {
        let mut tree = Tree::with_root(Path::new("."), dir());
        let root = tree.root();
        tree.expand(root);
        assert!(tree.get(root).children.is_some());
        assert!(!tree.get(root).has_children());
        assert_eq!(tree.get(root).name(), ".");
    }

    #[test]
    fn test_summary_merge() {
        let mut total = TreeSummary::for_root();
        total += TreeSummary::new(2, 3);
        total += TreeSummary::new(0, 4);
        assert_eq!(total, TreeSummary::new(3, 7));
    }

    #[test]
    fn test_unreadable_dir() {
        let mut tree = Tree::with_root(Path::new("."), dir());
        let root = tree.root();
        let locked = tree.push_child(
            root,
            PathBuf::from("./locked"),
            EntryMetadata::new(EntryKind::Directory, 0o333, None),
            true,
        );
        assert!(tree.get(locked).is_unreadable_dir());
        let secret = tree.push_child(
            root,
            PathBuf::from("./secret.txt"),
            EntryMetadata::new(EntryKind::File, 0o200, None),
            true,
        );
        assert!(!tree.get(secret).is_unreadable_dir());
    }
}
