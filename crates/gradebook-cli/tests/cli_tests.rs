//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gradebook(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.current_dir(dir.path()).env_remove("GRADEBOOK_DATA_DIR");
    cmd
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student grade tracker"));
}

#[test]
fn menu_end_to_end() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .write_stdin("1\n101\nAda\nMath,CS\n2\n101\n90, 85, 95\n3\n101\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Student Grade Tracker"))
        .stdout(predicate::str::contains("Current scores: [90, 85, 95]"))
        .stdout(predicate::str::contains(
            "Average score for student 101 is 90.00 (GPA 5)",
        ));

    let content = std::fs::read_to_string(dir.path().join("student/101.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "ID": "101",
            "Name": "Ada",
            "Courses": ["Math", "CS"],
            "Scores": [90, 85, 95],
            "Attendance": {},
            "Remarks": []
        })
    );
}

#[test]
fn menu_exits_on_end_of_input() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .arg("menu")
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn subcommands_end_to_end() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .args(["add", "--id", "101", "--name", "Ada", "--courses", "Math,CS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved successfully to"));

    gradebook(&dir)
        .args(["scores", "--id", "101", "--scores", "70,80,90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current scores: [70, 80, 90]"));

    gradebook(&dir)
        .args(["average", "--id", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is 80.00"));

    gradebook(&dir)
        .args(["gpa", "--id", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA for student 101 is 4"));

    gradebook(&dir)
        .args(["show", "--id", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Name\": \"Ada\""));
}

#[test]
fn add_refuses_existing_id() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["add", "--id", "7", "--name", "Bo"])
        .assert()
        .success();

    gradebook(&dir)
        .args(["add", "--id", "7", "--name", "Someone else"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_refuses_ids_outside_data_dir() {
    let dir = TempDir::new().unwrap();
    let outside = dir.path().join("elsewhere");

    gradebook(&dir)
        .args(["add", "--id", "../x", "--name", "Mallory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid student ID"));

    gradebook(&dir)
        .args(["add", "--name", "Mallory", "--id"])
        .arg(&outside)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid student ID"));

    assert!(!dir.path().join("x.json").exists());
    assert!(!dir.path().join("elsewhere.json").exists());
    assert!(!dir.path().join("student").exists());
}

#[test]
fn add_generates_id() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["add", "--name", "Cy"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Student ID: [1-9]\d\d").unwrap());
}

#[test]
fn bad_score_is_rejected() {
    let dir = TempDir::new().unwrap();
    gradebook(&dir)
        .args(["add", "--id", "5", "--name", "Di"])
        .assert()
        .success();
    gradebook(&dir)
        .args(["scores", "--id", "5", "--scores", "60,65"])
        .assert()
        .success();

    gradebook(&dir)
        .args(["scores", "--id", "5", "--scores", "70, 85, x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("score must be a number"));

    gradebook(&dir)
        .args(["average", "--id", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is 62.50"));
}

#[test]
fn unknown_student() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .args(["average", "--id", "404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is 0.00"));

    gradebook(&dir)
        .args(["gpa", "--id", "404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no student found with ID 404"));

    gradebook(&dir)
        .args(["show", "--id", "404"])
        .assert()
        .failure();
}

#[test]
fn corrupt_file_is_reported_as_corrupt() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("student")).unwrap();
    std::fs::write(dir.path().join("student/13.json"), "{ nope").unwrap();

    gradebook(&dir)
        .args(["show", "--id", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt student file"));

    gradebook(&dir)
        .write_stdin("1\n13\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading student file"));
}

#[test]
fn data_dir_flag_and_config() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .args(["--data-dir", "records", "add", "--id", "1", "--name", "Ed"])
        .assert()
        .success();
    assert!(dir.path().join("records/1.json").exists());

    std::fs::write(dir.path().join("gradebook.toml"), "data_dir = \"from-config\"\n").unwrap();
    gradebook(&dir)
        .args(["add", "--id", "2", "--name", "Fi"])
        .assert()
        .success();
    assert!(dir.path().join("from-config/2.json").exists());
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    gradebook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created gradebook.toml"));
    assert!(dir.path().join("gradebook.toml").exists());

    gradebook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
