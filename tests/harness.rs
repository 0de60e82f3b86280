//! Test harness for canopy integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use canopy::test_utils::TestTree;

pub fn run_canopy(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_canopy");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("FORCE_COLOR")
        .output()
        .expect("Failed to run canopy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Last non-empty line of plain output.
pub fn footer(stdout: &str) -> &str {
    stdout.lines().rev().find(|l| !l.is_empty()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "hello");
        assert!(file_path.exists());
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer(".\n\n1 directories, 0 files\n"), "1 directories, 0 files");
    }
}
