//! Test environment builder for isolated RentVix runs.
//!
//! `TestEnv` owns a temporary project directory (the working directory of
//! every run, with the data files under `data/`) and a temporary home, so
//! neither the developer's config nor their `RENTVIX_*` variables leak in.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

use super::fixtures::{FEATURES_JSON, MENUS_JSON, PACKAGES_JSON};

const ENV_OVERRIDES: &[&str] = &[
    "RENTVIX_DATA_DIR",
    "RENTVIX_DEBOUNCE_MS",
    "RENTVIX_STATUS",
    "RENTVIX_VERBOSITY",
    "RUST_LOG",
];

/// Result of running the rentvix binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as newline-delimited JSON
    pub fn json_lines(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }

    /// Names of the `event` fields in NDJSON output, in order
    pub fn event_names(&self) -> Vec<String> {
        self.json_lines()
            .iter()
            .filter_map(|v| v["event"].as_str().map(str::to_string))
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment with the standard fixtures written to `data/`
    pub fn with_fixtures() -> Self {
        let env = Self::empty();
        env.write_data_file("menus.json", MENUS_JSON);
        env.write_data_file("features.json", FEATURES_JSON);
        env.write_data_file("packages.json", PACKAGES_JSON);
        env
    }

    /// Environment without any data files
    pub fn empty() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_rentvix")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.project_path("data")
    }

    pub fn write_data_file(&self, name: &str, content: &str) {
        self.write_project_file(&format!("data/{name}"), content);
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_selections(&self) -> String {
        std::fs::read_to_string(self.data_dir().join("selections.toml")).unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("Failed to execute rentvix"))
    }

    /// Run with `input` piped to stdin; stdin is closed afterwards
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn rentvix");
        // The binary may exit before reading (bad arguments); ignore EPIPE.
        let _ = child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes());
        to_result(child.wait_with_output().expect("Failed to wait for rentvix"))
    }

    /// Current trees of a package as reported by `show --json`
    pub fn trees(&self, package: i64) -> Value {
        let package = package.to_string();
        let result = self.run(&["show", "--package", &package, "--json"]);
        assert!(result.success, "show failed: {}", result.stderr);
        result.json_lines().remove(0)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .with_test_home(self.home_dir.path());
        for key in ENV_OVERRIDES {
            cmd.env_remove(key);
        }
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

trait TestHomeExt {
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
    }
}

/// Ids of enabled nodes in a `show --json` tree, pre-order
pub fn enabled_ids(forest: &Value) -> Vec<String> {
    fn walk(nodes: &Value, out: &mut Vec<String>) {
        for node in nodes.as_array().into_iter().flatten() {
            if node["enabled"].as_bool() == Some(true) {
                out.push(match &node["id"] {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                });
            }
            walk(&node["children"], out);
        }
    }
    let mut out = Vec::new();
    walk(forest, &mut out);
    out
}
