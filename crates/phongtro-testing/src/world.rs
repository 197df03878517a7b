//! Isolated environments for CLI integration tests.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated config environment plus a way to run the `phongtro` binary
/// against it.
///
/// # Example
/// ```no_run
/// use phongtro_testing::TestWorld;
///
/// let world = TestWorld::new().unwrap();
/// let assert = world.run(&["rental", "list"]).unwrap();
/// assert.failure();
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestWorld {
    /// Environment with a config pointing at an unroutable backend, so
    /// commands fail fast at the connection instead of reaching anything.
    pub fn new() -> Result<Self> {
        Self::with_config(
            r#"
[api]
base_url = "http://127.0.0.1:9"
access_token = "test-token"
"#,
        )
    }

    /// Environment with explicit config file contents.
    pub fn with_config(contents: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, contents)?;

        Ok(Self {
            _temp_dir: temp_dir,
            config_path,
        })
    }

    /// Environment without any config file on disk.
    pub fn without_config() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        Ok(Self {
            _temp_dir: temp_dir,
            config_path,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Run the CLI with this world's config, scrubbing ambient overrides.
    pub fn run(&self, args: &[&str]) -> Result<assert_cmd::assert::Assert> {
        let mut cmd = Command::cargo_bin("phongtro")?;
        cmd.env_remove("PHONGTRO_API_URL")
            .env_remove("PHONGTRO_ACCESS_TOKEN")
            .env("PHONGTRO_CONFIG", &self.config_path)
            .args(args);
        Ok(cmd.assert())
    }
}
