#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

#[macro_export]
macro_rules! assert_env_eq {
    ($env:ident, $fixture:expr) => {
        for (key, expected_value) in $fixture {
            let actual_value = $env.get(OsStr::new(key));

            assert_eq!(true, actual_value.is_some(), "{key} is expected to be set, but isn't");
            let actual_value = actual_value.unwrap();
            assert_eq!(OsStr::new(expected_value), actual_value, "{key} is expected to be {expected_value:?}, but is {actual_value:?}");
        }
    };
}

/// A scratch directory the launcher runs in.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write env file");
        path
    }

    /// The launcher binary, started inside the scratch directory and without
    /// any `DOTENV_CONFIG_*` variables of the outer environment.
    pub fn launcher(&self) -> Command {
        let mut cmd = Command::cargo_bin("dotenv-launcher").expect("dotenv-launcher binary not built");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("DOTENV_CONFIG_DEBUG");
        cmd.env_remove("DOTENV_CONFIG_IGNORE_MISSING");
        cmd
    }
}
