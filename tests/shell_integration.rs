use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn jotz(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("jotz").unwrap();
    cmd.arg("--color")
        .arg("never")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

#[test]
fn test_walkthrough_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin(
            "add Buy milk\n\
             add   \n\
             add Call Bob\n\
             fav 1\n\
             edit 2\n\
             set Call Bob tomorrow\n\
             save\n\
             delete 1\n\
             list --json\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet. Add one!"))
        .stdout(predicate::str::contains("Empty note ignored."))
        .stdout(predicate::str::contains("★ 1. Buy milk"))
        .stdout(predicate::str::contains("✎ 2. [Call Bob]"))
        .stdout(predicate::str::contains("Note updated (2): Call Bob tomorrow"))
        .stdout(predicate::str::contains("Note deleted (1): Buy milk"))
        .stdout(predicate::str::contains("\"text\": \"Call Bob tomorrow\""))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_blank_edit_keeps_text() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin("add Keep me\nedit 1\nset   \nsave\nlist --json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Empty edit discarded; note kept."))
        .stdout(predicate::str::contains("\"text\": \"Keep me\""))
        .stdout(predicate::str::contains("\"editing\": null"));
}

#[test]
fn test_stale_index_reports_error_and_continues() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin("add Only\ndelete 2\nfav f1\nadd After\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: No note at index 2"))
        .stderr(predicate::str::contains("Error: No note at index f1"))
        .stdout(predicate::str::contains("Note added (2): After"));
}

#[test]
fn test_note_text_spacing_is_kept() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin("add a   b\tc\nadd x\nedit 2\nset  two   spaces\nsave\nlist --json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"a   b\\tc\""))
        .stdout(predicate::str::contains("\"text\": \"two   spaces\""))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_multi_delete_reports_in_given_order() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin("add A\nadd B\nadd C\nrm 1 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Note deleted (1): A\nNote deleted (3): C",
        ));
}

#[test]
fn test_upload_and_download_round_trip_bytes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("report.bin");
    let payload: Vec<u8> = (0u8..=255).rev().collect();
    fs::write(&src, &payload).unwrap();
    let out_dir = temp_dir.path().join("downloads");
    fs::create_dir(&out_dir).unwrap();

    jotz(temp_dir.path())
        .write_stdin(format!(
            "upload {}\nfiles\ndownload 1 {}\n",
            src.display(),
            out_dir.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. report.bin  256 B  download 1"))
        .stdout(predicate::str::contains("1 file(s) selected."))
        .stdout(predicate::str::contains("Downloaded report.bin"));

    assert_eq!(fs::read(out_dir.join("report.bin")).unwrap(), payload);
}

#[test]
fn test_download_without_selection_fails_softly() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin("files\ndownload 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files selected."))
        .stderr(predicate::str::contains("No uploaded file numbered 1"));
}

#[test]
fn test_notes_do_not_outlive_the_process() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin("add Ephemeral\n")
        .assert()
        .success();

    jotz(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ephemeral").not());
}

#[test]
fn test_help_lists_groups() {
    let temp_dir = tempfile::tempdir().unwrap();

    jotz(temp_dir.path())
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes:"))
        .stdout(predicate::str::contains("Editing:"))
        .stdout(predicate::str::contains("Files:"));
}
