use assert_cmd::Command;
use predicates::prelude::*;

fn jotz(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("jotz").unwrap();
    cmd.arg("--config-dir").arg(config_dir);
    cmd
}

#[test]
fn test_config_show_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("color = auto"))
        .stdout(predicate::str::contains("download-dir = ."))
        .stdout(predicate::str::contains("show-timestamps = true"));
}

#[test]
fn test_config_set_then_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .args(["config", "show-timestamps", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show-timestamps set to false"));

    assert!(temp_dir.path().join("config.json").exists());

    jotz(temp_dir.path())
        .args(["config", "show-timestamps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show-timestamps = false"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .args(["config", "font", "mono"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key 'font'"));
}

#[test]
fn test_download_dir_config_is_used() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("a.txt");
    std::fs::write(&src, "hello").unwrap();
    let target = temp_dir.path().join("dl");
    std::fs::create_dir(&target).unwrap();

    jotz(temp_dir.path())
        .args(["config", "download-dir", target.to_str().unwrap()])
        .assert()
        .success();

    jotz(temp_dir.path())
        .write_stdin(format!("upload {}\ndownload 1\n", src.display()))
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(target.join("a.txt")).unwrap(), "hello");
}
