//! Shared testing utilities for seo-brief CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `seo-brief` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("seo-brief").expect("Failed to locate seo-brief binary");
        cmd.current_dir(&self.work_dir).env_remove("SEO_BRIEF_LOG");
        cmd
    }

    /// Write a file relative to the work directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }

    /// Path where the capturing fallback clipboard stores copied text.
    pub fn clipboard_path(&self) -> PathBuf {
        self.root.path().join("clipboard.txt")
    }

    /// Text captured by the fallback clipboard command, if any.
    pub fn clipboard_contents(&self) -> Option<String> {
        fs::read_to_string(self.clipboard_path()).ok()
    }

    /// Configure the system clipboard off and a fallback command that writes
    /// copied text to [`TestContext::clipboard_path`].
    pub fn use_capturing_clipboard(&self) {
        let config = format!(
            r#"[clipboard]
use_system = false
fallback_command = ["sh", "-c", "cat > \"$1\"", "sh", "{}"]
"#,
            self.clipboard_path().display()
        );
        self.write_file("seo-brief.toml", &config);
    }

    /// Configure a fallback clipboard command that always fails.
    pub fn use_failing_clipboard(&self) {
        self.write_file(
            "seo-brief.toml",
            "[clipboard]\nuse_system = false\nfallback_command = [\"sh\", \"-c\", \"exit 1\"]\n",
        );
    }
}
