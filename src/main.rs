//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use canopy::{OutputFormat, TreeConfig, TreeError, TreeWalker, print_tree, write_root_error};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "List the contents of a directory as a tree")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Directory to display (overrides PATH)
    #[arg(short = 'r', long = "root", value_name = "PATH")]
    root: Option<PathBuf>,

    /// Print the full path of every entry
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// List directories only (files are still counted)
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Descend only N levels deep (0 = unlimited)
    #[arg(short = 'L', long = "level", value_name = "N", default_value = "0")]
    level: usize,

    /// Print permission modes
    #[arg(short = 'p', long = "permissions")]
    permissions: bool,

    /// Sort by last modification time, newest first
    #[arg(short = 't', long = "sort-time")]
    sort_time: bool,

    /// Output in JSON format
    #[arg(short = 'J', long = "json", conflicts_with = "xml")]
    json: bool,

    /// Output in XML format
    #[arg(short = 'X', long = "xml", conflicts_with = "json")]
    xml: bool,

    /// Print without indentation lines
    #[arg(short = 'i', long = "no-indent")]
    no_indent: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.xml {
            OutputFormat::Xml
        } else {
            OutputFormat::Plain
        }
    }

    fn into_config(self) -> TreeConfig {
        let output_format = self.output_format();
        TreeConfig {
            root: self.root.unwrap_or(self.path),
            show_full_path: self.full_path,
            dirs_only: self.dirs_only,
            max_depth: self.level,
            show_permissions: self.permissions,
            sort_by_time: self.sort_time,
            output_format,
            no_indent: self.no_indent,
            ignore_patterns: self.ignore,
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let use_color = should_use_color(args.color);
    let config = args.into_config();

    let built = match TreeWalker::new(&config).walk() {
        Ok(built) => built,
        Err(e) => {
            eprintln!("canopy: {}", e);
            if e.is_validation() {
                if let Err(write_err) = write_root_error(std::io::stdout().lock(), &config.root) {
                    tracing::warn!(error = %write_err, "failed to write root error report");
                }
            }
            process::exit(1);
        }
    };
    tracing::debug!(
        directories = built.summary.directories,
        files = built.summary.files,
        "tree built"
    );

    if let Err(e) = print_tree(&built, &config, use_color).map_err(TreeError::from) {
        eprintln!("canopy: {}", e);
        process::exit(1);
    }
}
