use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("connoisseur");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // storefront flow
    run_help(&home, &["kits"]);
    run_help(&home, &["kit"]);
    run_help(&home, &["gallery"]);
    run_help(&home, &["adjust"]);
    run_help(&home, &["set"]);
    run_help(&home, &["status"]);
    run_help(&home, &["continue"]);
    run_help(&home, &["back"]);
    run_help(&home, &["submit"]);
    run_help(&home, &["summary"]);
    run_help(&home, &["reset"]);
    run_help(&home, &["session"]);

    // admin studio
    run_help(&home, &["admin"]);
    run_help(&home, &["admin", "open"]);
    run_help(&home, &["admin", "close"]);
    run_help(&home, &["admin", "list"]);
    run_help(&home, &["admin", "add"]);
    run_help(&home, &["admin", "remove"]);
}
