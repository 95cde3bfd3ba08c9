#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// A harness whose catalog already holds the [`TestFixtures::catalog_json`] plants
    pub fn with_catalog() -> Self {
        let harness = Self::new();
        let catalog = harness.write_file("catalog.json", TestFixtures::catalog_json());
        harness.run_success(&["plants", "import", catalog.to_str().expect("utf-8 temp path")]);
        harness
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("odla").expect("Failed to find odla binary");

        // Point the binary at this test's database and keep it away from any odla.toml
        cmd.env("ODLA_DATABASE_PATH", &self.db_path);
        cmd.env_remove("ODLA_USER_ID");
        cmd.env_remove("RUST_LOG");
        cmd.current_dir(self.temp_dir.path());

        cmd
    }

    /// Get the database path for this test instance
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Writes a file into the harness directory and returns its path
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Three catalog plants; imported in this order they get IDs 1, 2 and 3.
    pub fn catalog_json() -> &'static str {
        r#"[
            {
                "name": "Ros",
                "latin_name": "Rosa",
                "category": "blomma",
                "type": "perenn",
                "watering": { "months": ["juni", "juli"] },
                "bloom_period": ["juni", "juli", "augusti"]
            },
            {
                "name": "Äppelträd",
                "category": "träd",
                "type": "lövträd",
                "pruning": { "months": ["februari", "mars"], "notes": "Beskär innan savningen." },
                "winter": { "months": ["november"], "interval": "Varje höst" }
            },
            {
                "name": "Basilika",
                "category": "ört",
                "type": "kryddväxt",
                "watering": { "months": null, "notes": "" }
            }
        ]"#
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Task"))
            .and(predicate::str::contains("Category"))
    }

    /// Predicate to check if output indicates a successful change
    pub fn succeeded() -> impl Predicate<str> {
        predicate::str::contains("✓")
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
