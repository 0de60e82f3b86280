//! Directory tree building
//!
//! The walk happens in one pass before any output is produced:
//!
//! - `probe` validates the root path
//! - `entries` lists a directory, drops hidden/ignored entries, counts and sorts
//! - `walker` recurses through directories and assembles the arena-owned `Tree`

mod entries;
mod filter;
mod metadata;
mod node;
mod probe;
mod walker;

pub use entries::{Listing, RawEntry, compare_entries, prepare_listing, read_entries, sort_entries};
pub use filter::{EntryFilter, is_hidden};
pub use metadata::{EntryKind, EntryMetadata, OWNER_READ};
pub use node::{NodeId, Tree, TreeNode, TreeSummary};
pub use probe::validate;
pub use walker::{BuiltTree, TreeWalker};
