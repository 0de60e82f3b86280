//! Plain-text tree listing
//!
//! ```text
//! .
//! ├── src
//! │   └── main.rs
//! └── Cargo.toml
//!
//! 1 directories, 2 files
//! ```

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::config::TreeConfig;
use crate::tree::TreeSummary;

use super::{NodeFormatter, RenderNode};

/// Appended to directories that cannot be opened.
pub const ERROR_MARKER: &str = "    [error opening dir]";

/// Formatter for the indented listing.
pub struct PlainFormatter<'c, W> {
    config: &'c TreeConfig,
    out: W,
}

impl<'c, W: WriteColor> PlainFormatter<'c, W> {
    pub fn new(config: &'c TreeConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Guides for every ancestor level, then the branch for the node itself.
    fn prefix(&self, node: &RenderNode<'_>) -> String {
        if node.is_root || self.config.no_indent {
            return String::new();
        }
        let mut prefix: String = node
            .ancestors_last
            .iter()
            .map(|&last| if last { "    " } else { "│   " })
            .collect();
        prefix.push_str(if node.is_last { "└── " } else { "├── " });
        prefix
    }
}

impl<W: WriteColor> NodeFormatter for PlainFormatter<'_, W> {
    fn enter(&mut self, node: &RenderNode<'_>) -> io::Result<()> {
        let prefix = self.prefix(node);
        write!(self.out, "{}", prefix)?;

        if self.config.show_permissions && !node.is_root {
            write!(self.out, "[{}] ", node.metadata.symbolic_mode())?;
        }

        if node.is_dir() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(self.out, "{}", node.label)?;
        self.out.reset()?;

        if node.unreadable {
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(self.out, "{}", ERROR_MARKER)?;
            self.out.reset()?;
        }
        writeln!(self.out)
    }

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()> {
        writeln!(self.out)?;
        if self.config.dirs_only {
            writeln!(self.out, "{} directories", summary.directories)
        } else {
            writeln!(
                self.out,
                "{} directories, {} files",
                summary.directories, summary.files
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use termcolor::NoColor;

    use super::*;
    use crate::output::render;
    use crate::tree::{BuiltTree, EntryKind, EntryMetadata, Tree};

    fn dir(mode: u32) -> EntryMetadata {
        EntryMetadata::new(EntryKind::Directory, mode, None)
    }

    fn file() -> EntryMetadata {
        EntryMetadata::new(EntryKind::File, 0o644, None)
    }

    /// ```text
    /// .
    /// ├── locked
    /// ├── src
    /// │   ├── lib.rs
    /// │   └── util
    /// │       └── mod.rs
    /// └── z.txt
    /// ```
    fn sample_tree() -> BuiltTree {
        let mut tree = Tree::with_root(Path::new("."), dir(0o755));
        let root = tree.root();
        tree.expand(root);
        tree.push_child(root, PathBuf::from("./locked"), dir(0o333), false);
        let src = tree.push_child(root, PathBuf::from("./src"), dir(0o755), false);
        tree.expand(src);
        tree.push_child(src, PathBuf::from("./src/lib.rs"), file(), false);
        let util = tree.push_child(src, PathBuf::from("./src/util"), dir(0o755), true);
        tree.expand(util);
        tree.push_child(util, PathBuf::from("./src/util/mod.rs"), file(), true);
        tree.push_child(root, PathBuf::from("./z.txt"), file(), true);
        BuiltTree {
            tree,
            summary: TreeSummary::new(4, 3),
        }
    }

    fn format(config: &TreeConfig) -> String {
        let mut out = NoColor::new(Vec::new());
        render(&sample_tree(), config, &mut PlainFormatter::new(config, &mut out)).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_format_output() {
        let output = format(&TreeConfig::default());
        assert_eq!(
            output,
            ".\n\
             ├── locked    [error opening dir]\n\
             ├── src\n\
             │   ├── lib.rs\n\
             │   └── util\n\
             │       └── mod.rs\n\
             └── z.txt\n\
             \n\
             4 directories, 3 files\n"
        );
    }

    #[test]
    fn test_no_indent() {
        let output = format(&TreeConfig {
            no_indent: true,
            ..Default::default()
        });
        assert!(output.starts_with(".\nlocked    [error opening dir]\nsrc\nlib.rs\nutil\nmod.rs\nz.txt\n"));
    }

    #[test]
    fn test_full_path_and_permissions() {
        let output = format(&TreeConfig {
            show_full_path: true,
            show_permissions: true,
            ..Default::default()
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], ".");
        assert_eq!(lines[1], "├── [d-wx-wx-wx] ./locked    [error opening dir]");
        assert_eq!(lines[3], "│   ├── [-rw-r--r--] ./src/lib.rs");
    }

    #[test]
    fn test_dirs_only_footer() {
        let output = format(&TreeConfig {
            dirs_only: true,
            ..Default::default()
        });
        assert!(output.ends_with("\n\n4 directories\n"));
    }
}
