use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_builtin_scenario() {
    let (dir, _) = common::sitedata_dir(common::SITEDATA).unwrap();

    let mut cmd = Command::new(cargo_bin!("payments"));
    cmd.current_dir(dir.path()).env_remove("SITEDATA_FILE");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment system - version"))
        .stdout(predicate::str::contains(
            r#"{"status":"success","payment_id":2,"account":"token1","secret_key":"C598-ECF9-F0F7-881A","amount":"500"}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"status":"success","payment_id":3,"account":"token2","secret_key":"C598-ECF9-F0F7-881B","amount":"500"}"#,
        ))
        .stdout(predicate::str::contains("failure").not())
        .stdout(predicate::str::contains(
            "account,balance,payments\ntoken1,0,2\ntoken2,0,4\n",
        ));
}

#[test]
fn test_history_lists_successes_in_order() {
    let (_dir, path) = common::sitedata_dir(common::SITEDATA).unwrap();

    let output = Command::new(cargo_bin!("payments"))
        .arg("--file")
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let history: Vec<serde_json::Value> = stdout
        .split("Payment history:")
        .nth(1)
        .expect("history section missing")
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let ids: Vec<u64> = history
        .iter()
        .map(|entry| entry["payment_id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_requests_from_csv() {
    let mut cmd = Command::new(cargo_bin!("payments"));
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--file")
        .arg("tests/fixtures/sitedata.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"status":"failure","payment_id":2,"reason":"insufficient_funds"}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"status":"failure","payment_id":3,"reason":"invalid_amount"}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"status":"success","payment_id":4,"account":"token2""#,
        ))
        .stdout(predicate::str::contains(
            r#"{"status":"failure","payment_id":5,"reason":"insufficient_funds"}"#,
        ))
        .stdout(predicate::str::contains("token1,500,1\ntoken2,1000,1\n"));
}

#[test]
fn test_custom_accounts() {
    let (_dir, path) = common::sitedata_dir(common::SITEDATA).unwrap();
    let requests = common::requests_csv(&[("1", "100"), ("2", "100")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("payments"));
    cmd.arg(requests.path())
        .arg("--file")
        .arg(&path)
        .arg("--account")
        .arg("token2=150")
        .arg("--account")
        .arg("token1=1000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"status":"success","payment_id":1,"account":"token2""#,
        ))
        .stdout(predicate::str::contains(
            r#"{"status":"success","payment_id":2,"account":"token1""#,
        ))
        .stdout(predicate::str::contains("token2,50,1\ntoken1,900,1\n"));
}

#[test]
fn test_malformed_request_rows_are_skipped() {
    let (_dir, path) = common::sitedata_dir(common::SITEDATA).unwrap();
    let requests =
        common::requests_csv(&[("1", "100"), ("abc", "100"), ("3", "not_a_number"), ("4", "200")])
            .unwrap();

    let mut cmd = Command::new(cargo_bin!("payments"));
    cmd.arg(requests.path()).arg("--file").arg(&path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment request"))
        .stdout(predicate::str::contains("token1,700,2\ntoken2,2000,0\n"));
}

#[test]
fn test_invalid_account_spec() {
    let (_dir, path) = common::sitedata_dir(common::SITEDATA).unwrap();

    let mut cmd = Command::new(cargo_bin!("payments"));
    cmd.arg("--file").arg(&path).arg("--account").arg("token1=-10");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("balance must not be negative"));
}

#[test]
fn test_missing_document_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("payments"));
    cmd.arg("--file").arg(dir.path().join("sitedata.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not be read"));
}
