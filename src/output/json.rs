//! JSON output formatting
//!
//! The document is an array of the root object followed by a report object:
//!
//! ```text
//! [
//!   {"type":"directory","name":".","contents":[
//!     {"type":"file","name":"Cargo.toml"}
//!   ]},
//!   {"type":"report","directories":1,"files":1}
//! ]
//! ```

use std::io::{self, Write};

use serde::Serialize;

use crate::config::TreeConfig;
use crate::tree::TreeSummary;

use super::{NodeFormatter, RenderNode};

/// Trailing summary object.
#[derive(Debug, Serialize)]
struct JsonReport {
    #[serde(rename = "type")]
    kind: &'static str,
    directories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<usize>,
}

/// Formatter for JSON output.
pub struct JsonFormatter<'c, W> {
    config: &'c TreeConfig,
    out: W,
}

impl<'c, W: Write> JsonFormatter<'c, W> {
    pub fn new(config: &'c TreeConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Line break plus indentation for `level`; nothing in compact mode.
    fn break_line(&mut self, level: usize) -> io::Result<()> {
        if self.config.no_indent {
            return Ok(());
        }
        write!(self.out, "\n{:width$}", "", width = level * 2)
    }

    fn write_field(&mut self, key: &str, value: &str) -> io::Result<()> {
        write!(self.out, ",\"{}\":", key)?;
        serde_json::to_writer(&mut self.out, value)?;
        Ok(())
    }
}

impl<W: Write> NodeFormatter for JsonFormatter<'_, W> {
    fn start(&mut self) -> io::Result<()> {
        write!(self.out, "[")
    }

    fn enter(&mut self, node: &RenderNode<'_>) -> io::Result<()> {
        if !node.is_first {
            write!(self.out, ",")?;
        }
        self.break_line(node.depth + 1)?;

        write!(self.out, "{{\"type\":\"{}\",\"name\":", node.type_name())?;
        serde_json::to_writer(&mut self.out, &node.label)?;
        if self.config.show_permissions {
            self.write_field("mode", &node.metadata.octal_mode())?;
            self.write_field("prot", &node.metadata.symbolic_mode())?;
        }
        if node.unreadable {
            self.write_field("error", "error opening dir")?;
        }

        if node.has_children {
            write!(self.out, ",\"contents\":[")
        } else {
            write!(self.out, "}}")
        }
    }

    fn leave(&mut self, node: &RenderNode<'_>) -> io::Result<()> {
        if node.has_children {
            self.break_line(node.depth + 1)?;
            write!(self.out, "]}}")?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()> {
        let report = JsonReport {
            kind: "report",
            directories: summary.directories,
            files: (!self.config.dirs_only).then_some(summary.files),
        };
        write!(self.out, ",")?;
        self.break_line(1)?;
        serde_json::to_writer(&mut self.out, &report)?;
        self.break_line(0)?;
        writeln!(self.out, "]")
    }
}
