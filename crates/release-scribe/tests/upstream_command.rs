use assert_cmd::Command;
use predicates::str::contains;

// An empty package name short-circuits before any network call, so this
// is the only resolver path an offline integration test can exercise.
#[test]
fn empty_package_name_reports_no_version() {
    Command::cargo_bin("release-scribe")
        .expect("binary built")
        .args(["upstream", ""])
        .assert()
        .success()
        .stdout(contains("no upstream version found"));
}
