//! XML output formatting

use std::borrow::Cow;
use std::io::{self, Write};

use crate::config::TreeConfig;
use crate::tree::TreeSummary;

use super::{NodeFormatter, RenderNode};

/// Formatter for XML output.
pub struct XmlFormatter<'c, W> {
    config: &'c TreeConfig,
    out: W,
}

impl<'c, W: Write> XmlFormatter<'c, W> {
    pub fn new(config: &'c TreeConfig, out: W) -> Self {
        Self { config, out }
    }

    fn indent(&mut self, level: usize) -> io::Result<()> {
        if self.config.no_indent {
            return Ok(());
        }
        write!(self.out, "{:width$}", "", width = level * 2)
    }

    fn newline(&mut self) -> io::Result<()> {
        if self.config.no_indent {
            return Ok(());
        }
        writeln!(self.out)
    }
}

impl<W: Write> NodeFormatter for XmlFormatter<'_, W> {
    fn start(&mut self) -> io::Result<()> {
        write!(self.out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        self.newline()?;
        write!(self.out, "<tree>")?;
        self.newline()
    }

    fn enter(&mut self, node: &RenderNode<'_>) -> io::Result<()> {
        self.indent(node.depth + 1)?;
        write!(
            self.out,
            "<{} name=\"{}\"",
            node.type_name(),
            escape_attr(&node.label)
        )?;
        if self.config.show_permissions {
            write!(
                self.out,
                " mode=\"{}\" prot=\"{}\"",
                node.metadata.octal_mode(),
                node.metadata.symbolic_mode()
            )?;
        }
        if node.unreadable {
            write!(self.out, " error=\"error opening dir\"")?;
        }
        write!(self.out, "{}", if node.has_children { ">" } else { "/>" })?;
        self.newline()
    }

    fn leave(&mut self, node: &RenderNode<'_>) -> io::Result<()> {
        if node.has_children {
            self.indent(node.depth + 1)?;
            write!(self.out, "</{}>", node.type_name())?;
            self.newline()?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()> {
        self.indent(1)?;
        write!(self.out, "<report>")?;
        self.newline()?;
        self.indent(2)?;
        write!(self.out, "<directories>{}</directories>", summary.directories)?;
        self.newline()?;
        if !self.config.dirs_only {
            self.indent(2)?;
            write!(self.out, "<files>{}</files>", summary.files)?;
            self.newline()?;
        }
        self.indent(1)?;
        write!(self.out, "</report>")?;
        self.newline()?;
        writeln!(self.out, "</tree>")
    }
}

/// Escape a string for use inside a double-quoted attribute.
///
/// Tab, newline and carriage return become character references so parsers
/// keep them; other C0 controls are not allowed in XML 1.0 and become U+FFFD.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>' | '"' | '\'') || c.is_ascii_control();
    if !value.contains(needs_escape) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            '\u{0}'..='\u{1f}' => escaped.push(char::REPLACEMENT_CHARACTER),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
