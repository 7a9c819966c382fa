use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    /// Where the binary keeps its session, snapshot and config.
    pub fn data_dir(&self) -> PathBuf {
        self.home.join(".config/connoisseur")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("connoisseur");
        cmd.env("HOME", &self.home)
            .env_remove("CONNOISSEUR_HOME")
            .env_remove("CONNOISSEUR_ORDER_ENDPOINT")
            .env_remove("CONNOISSEUR_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_err(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        let err: Value = serde_json::from_slice(&out).expect("error json output");
        assert_eq!(err["ok"], false);
        err
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.data_dir();
        fs::create_dir_all(&dir).expect("create data dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }
}
