//! Tree formatting and display
//!
//! One pre-order traversal (`render`) drives a format-specific
//! [`NodeFormatter`]:
//! - `plain` - indented listing with box-drawing guides and optional colors
//! - `json` - a JSON array holding the tree and a report object
//! - `xml` - an XML document holding the tree and a report element
//!
//! All three receive the same nodes and the same totals, so the reports agree.

mod json;
mod plain;
mod xml;

use std::io::{self, Write};
use std::path::Path;

use termcolor::{BufferedStandardStream, ColorChoice, NoColor, WriteColor};

use crate::config::{OutputFormat, TreeConfig};
use crate::tree::{BuiltTree, EntryMetadata, NodeId, Tree, TreeSummary};

pub use json::JsonFormatter;
pub use plain::{ERROR_MARKER, PlainFormatter};
pub use xml::XmlFormatter;

/// What a formatter sees of one node.
#[derive(Debug, Clone)]
pub struct RenderNode<'a> {
    /// Name or full path, already resolved for this node.
    pub label: String,
    pub metadata: &'a EntryMetadata,
    pub depth: usize,
    pub is_root: bool,
    /// First entry in the parent's display list.
    pub is_first: bool,
    pub is_last: bool,
    /// Expanded with at least one child; children follow before `leave`.
    pub has_children: bool,
    /// Directory without owner-read permission.
    pub unreadable: bool,
    /// `is_last` of every ancestor below the root, outermost first.
    pub ancestors_last: Vec<bool>,
}

impl<'a> RenderNode<'a> {
    fn new(tree: &'a Tree, id: NodeId, is_first: bool, config: &TreeConfig) -> Self {
        let node = tree.get(id);
        let label = if node.is_root() || config.show_full_path {
            node.path.display().to_string()
        } else {
            node.name()
        };

        let mut ancestors_last: Vec<bool> = tree
            .ancestors(id)
            .filter(|&a| !tree.get(a).is_root())
            .map(|a| tree.get(a).is_last)
            .collect();
        ancestors_last.reverse();

        Self {
            label,
            metadata: &node.metadata,
            depth: node.depth,
            is_root: node.is_root(),
            is_first,
            is_last: node.is_last,
            has_children: node.has_children(),
            unreadable: node.is_unreadable_dir(),
            ancestors_last,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    /// Element/type name shared by the JSON and XML formats.
    pub fn type_name(&self) -> &'static str {
        if self.is_dir() { "directory" } else { "file" }
    }
}

/// Per-format callbacks for the shared traversal.
pub trait NodeFormatter {
    fn start(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called for every node before its children.
    fn enter(&mut self, node: &RenderNode<'_>) -> io::Result<()>;

    /// Called for every node after its children.
    fn leave(&mut self, _node: &RenderNode<'_>) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()>;
}

/// Walk the tree in pre-order, feeding every node to `formatter`.
pub fn render<F: NodeFormatter + ?Sized>(
    built: &BuiltTree,
    config: &TreeConfig,
    formatter: &mut F,
) -> io::Result<()> {
    formatter.start()?;
    visit(&built.tree, built.tree.root(), true, config, formatter)?;
    formatter.finish(&built.summary)
}

fn visit<F: NodeFormatter + ?Sized>(
    tree: &Tree,
    id: NodeId,
    is_first: bool,
    config: &TreeConfig,
    formatter: &mut F,
) -> io::Result<()> {
    let node = RenderNode::new(tree, id, is_first, config);
    formatter.enter(&node)?;
    for (i, &child) in tree.children(id).iter().enumerate() {
        visit(tree, child, i == 0, config, formatter)?;
    }
    formatter.leave(&node)
}

/// Render in the configured format to any color-capable writer.
pub fn write_tree<W: WriteColor>(built: &BuiltTree, config: &TreeConfig, out: W) -> io::Result<()> {
    match config.output_format {
        OutputFormat::Plain => render(built, config, &mut PlainFormatter::new(config, out)),
        OutputFormat::Json => render(built, config, &mut JsonFormatter::new(config, out)),
        OutputFormat::Xml => render(built, config, &mut XmlFormatter::new(config, out)),
    }
}

/// Render without colors into a string.
pub fn format_tree(built: &BuiltTree, config: &TreeConfig) -> String {
    let mut out = NoColor::new(Vec::new());
    // writing into a Vec cannot fail
    let _ = write_tree(built, config, &mut out);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

/// Render to stdout. Colors apply to plain output only.
pub fn print_tree(built: &BuiltTree, config: &TreeConfig, use_color: bool) -> io::Result<()> {
    let choice = if use_color && config.output_format == OutputFormat::Plain {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = BufferedStandardStream::stdout(choice);
    write_tree(built, config, &mut stdout)?;
    stdout.flush()
}

/// Report a root that could not be opened: the path with the error marker,
/// then an empty summary.
pub fn write_root_error<W: Write>(mut out: W, root: &Path) -> io::Result<()> {
    writeln!(out, "{}{}", root.display(), ERROR_MARKER)?;
    writeln!(out)?;
    writeln!(out, "0 directories, 0 files")
}
