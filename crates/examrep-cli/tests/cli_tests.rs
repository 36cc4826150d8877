//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any user config or log settings.
fn examrep(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("examrep").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("EXAMREP_CONFIG")
        .env_remove("EXAMREP_LOCALE")
        .env_remove("RUST_LOG");
    cmd
}

fn record(instructor: &str, student: &str, score: i64, date: &str) -> String {
    format!(
        r#"{{
        "student": {{"name": "{student}", "age": 19, "score": {score}}},
        "instructor": {{"name": "{instructor}", "age": 42, "car": "Lada Granta"}},
        "date": "{date}"
    }}"#
    )
}

fn write_results(dir: &TempDir, records: &[String]) -> std::path::PathBuf {
    let path = dir.path().join("results.json");
    std::fs::write(&path, format!("[{}]", records.join(",\n"))).unwrap();
    path
}

fn read_report(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join("report.txt")).unwrap()
}

#[test]
fn same_instructor_is_averaged() {
    let dir = TempDir::new().unwrap();
    write_results(
        &dir,
        &[
            record("Иванов Иван Иванович", "A", 5, "10-05-2019T09:00"),
            record("Иванов Иван Иванович", "B", 3, "11-05-2019T14:30"),
        ],
    );

    examrep(dir.path())
        .args(["results.json", "report.txt"])
        .assert()
        .success();

    assert_eq!(
        read_report(&dir),
        "Иванов Иван Иванович: количество экзаменов = 2, средняя оценка = 4.000\n"
    );
}

#[test]
fn invalid_score_is_skipped_and_logged() {
    let dir = TempDir::new().unwrap();
    write_results(
        &dir,
        &[
            record("Petrov", "A", 4, "10-05-2019T09:00"),
            record("Sidorov", "B", 6, "10-05-2019T10:00"),
        ],
    );

    let output = examrep(dir.path())
        .args(["results.json", "report.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("error reading record").count(), 1);
    assert!(stderr.contains("error reading record 2"));

    let report = read_report(&dir);
    assert_eq!(
        report,
        "Petrov: количество экзаменов = 1, средняя оценка = 4.000\n"
    );
    assert!(!report.contains("Sidorov"));
}

#[test]
fn bad_date_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_results(
        &dir,
        &[
            record("Petrov", "A", 4, "99-99-2011T11:11"),
            record("Petrov", "B", 2, "01-01-2020T08:00"),
        ],
    );

    examrep(dir.path())
        .args(["results.json", "report.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("error reading record 1"));

    assert_eq!(
        read_report(&dir),
        "Petrov: количество экзаменов = 1, средняя оценка = 2.000\n"
    );
}

#[test]
fn empty_input_gives_empty_report() {
    let dir = TempDir::new().unwrap();
    write_results(&dir, &[]);

    examrep(dir.path())
        .args(["results.json", "report.txt"])
        .assert()
        .success();

    assert_eq!(read_report(&dir), "");
}

#[test]
fn unreadable_input_gives_empty_report() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("report.txt"), "previous run\n").unwrap();

    examrep(dir.path())
        .args(["no_such_file.json", "report.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("error reading exam results"));

    assert_eq!(read_report(&dir), "");
}

#[test]
fn debug_flag_traces_exams() {
    let dir = TempDir::new().unwrap();
    write_results(&dir, &[record("Petrov", "A", 4, "10-05-2019T09:00")]);

    examrep(dir.path())
        .args(["--debug", "results.json", "report.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("adding exam result"))
        .stderr(predicate::str::contains("Instructor(Petrov, age=42, car=Lada Granta)"));

    examrep(dir.path())
        .args(["results.json", "report.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("adding exam result").not());
}

#[test]
fn english_locale_from_config() {
    let dir = TempDir::new().unwrap();
    write_results(&dir, &[record("Petrov", "A", 5, "10-05-2019T09:00")]);
    std::fs::write(dir.path().join("examrep.toml"), "locale = \"en\"\n").unwrap();

    examrep(dir.path())
        .args(["results.json", "report.txt"])
        .assert()
        .success();

    assert_eq!(read_report(&dir), "Petrov: exams = 1, average score = 5.000\n");
}

#[test]
fn unwritable_report_fails() {
    let dir = TempDir::new().unwrap();
    write_results(&dir, &[record("Petrov", "A", 5, "10-05-2019T09:00")]);
    // A directory cannot be opened as the report file.
    std::fs::create_dir(dir.path().join("report.txt")).unwrap();

    examrep(dir.path())
        .args(["results.json", "report.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn missing_arguments() {
    let dir = TempDir::new().unwrap();
    examrep(dir.path()).arg("results.json").assert().failure();
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    examrep(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average exam score report"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    examrep(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("examrep"));
}
