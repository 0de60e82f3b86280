//! Run configuration shared by the walker and the renderers

use std::path::PathBuf;

use clap::ValueEnum;

/// Output syntax for the rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented listing with box-drawing guides
    #[default]
    Plain,
    /// One JSON array holding the tree and a report object
    Json,
    /// One XML document holding the tree and a report element
    Xml,
}

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    pub root: PathBuf,
    pub show_full_path: bool,
    /// Hide files from the output. Files are still counted.
    pub dirs_only: bool,
    /// Deepest level to descend to; 0 means unlimited.
    pub max_depth: usize,
    pub show_permissions: bool,
    /// Most recently modified first instead of by name.
    pub sort_by_time: bool,
    pub output_format: OutputFormat,
    /// Drop indentation (and, for JSON/XML, all whitespace between tokens).
    pub no_indent: bool,
    /// Glob patterns matched against entry names; matches are treated like hidden entries.
    pub ignore_patterns: Vec<String>,
}

impl TreeConfig {
    /// Whether a directory at `depth` lies inside the depth limit and may be expanded.
    pub fn descends_to(&self, depth: usize) -> bool {
        self.max_depth == 0 || depth < self.max_depth
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            show_full_path: false,
            dirs_only: false,
            max_depth: 0,
            show_permissions: false,
            sort_by_time: false,
            output_format: OutputFormat::Plain,
            no_indent: false,
            ignore_patterns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_depth_descends_everywhere() {
        let config = TreeConfig::default();
        assert!(config.descends_to(1));
        assert!(config.descends_to(1_000));
    }

    #[test]
    fn depth_limit_stops_at_max() {
        let config = TreeConfig {
            max_depth: 2,
            ..Default::default()
        };
        assert!(config.descends_to(1));
        assert!(!config.descends_to(2));
        assert!(!config.descends_to(3));
    }
}
