//! Shared test fixtures for platform, locator, backup, and theme tests.
//!
//! `FakeEnvironment` stands in for the process environment so detection and
//! path resolution can be exercised without mutating real env vars.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::platform::Environment;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "alacritty-themes-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Root directory as a UTF-8 string, for env-var fixtures.
    pub fn root(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// File names directly under `relative`, sorted.
    pub fn file_names(&self, relative: &str) -> Vec<String> {
        let mut names = fs::read_dir(self.child(relative))
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Fixed environment snapshot. Unset probes behave like failed probes.
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    vars: BTreeMap<String, String>,
    kernel_release_file: Option<String>,
    kernel_release_command: Option<String>,
    command_calls: AtomicUsize,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_kernel_release_file(mut self, contents: &str) -> Self {
        self.kernel_release_file = Some(contents.to_string());
        self
    }

    pub fn with_kernel_release_command(mut self, output: &str) -> Self {
        self.kernel_release_command = Some(output.to_string());
        self
    }

    /// Number of times the `uname -r` probe was consulted.
    pub fn command_calls(&self) -> usize {
        self.command_calls.load(Ordering::Relaxed)
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn kernel_release_file(&self) -> Option<String> {
        self.kernel_release_file.clone()
    }

    fn kernel_release_command(&self) -> Option<String> {
        self.command_calls.fetch_add(1, Ordering::Relaxed);
        self.kernel_release_command.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert_eq!(fixture.file_names("nested"), vec!["file.txt".to_string()]);
    }

    #[test]
    fn fake_environment_counts_command_probes() {
        let env = FakeEnvironment::new().with_var("HOME", "/home/u");
        assert_eq!(env.var("HOME").as_deref(), Some("/home/u"));
        assert_eq!(env.kernel_release_command(), None);
        assert_eq!(env.command_calls(), 1);
    }
}
