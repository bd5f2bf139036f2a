use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use tdo::task::Task;

pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command pointed at this store's data dir, cwd inside the tempdir so
    /// no stray `.tdo.toml` from the host leaks in.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tdo").expect("binary");
        cmd.current_dir(self.dir.path());
        cmd.env("TDO_DATA_DIR", self.dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    #[allow(dead_code)]
    pub fn read_tasks(&self) -> Vec<Task> {
        let path = self.tasks_file();
        if !path.exists() {
            return Vec::new();
        }
        let contents = fs::read_to_string(&path).expect("read tasks file");
        serde_json::from_str(&contents).expect("parse tasks file")
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join(".tdo.toml"), contents).expect("write config");
    }
}
