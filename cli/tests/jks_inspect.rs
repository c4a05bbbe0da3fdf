use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use jks::testing::KeystoreBuilder;
use predicates::prelude::*;
use tempfile::TempDir;

fn keyloom() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_keyloom"));
    cmd.env_remove("KEYLOOM_LOG");
    cmd
}

fn keystore() -> Vec<u8> {
    let payload: Vec<u8> = (0u8..40).collect();
    KeystoreBuilder::new()
        .key_entry(
            "server",
            &payload,
            &[("X.509", &[0x30, 0x00]), ("PGP", &[0x01])],
        )
        .cert_entry("X.509", &[0x30, 0x03, 0x02, 0x01, 0x00])
        .build()
}

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_jks_inspect_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "store.jks", &keystore());

    keyloom()
        .args(["jks", "inspect"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keystore: jks (2 entries)"))
        .stdout(predicate::str::contains(
            "private key \"server\": 16 byte encrypted key, 1 chain certificate(s)",
        ))
        .stdout(predicate::str::contains("certificate X.509: 5 bytes"));
}

#[test]
fn test_jks_inspect_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "store.jks", &keystore());

    let output = keyloom()
        .args(["jks", "inspect", "-o", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!("jks", report["format"]);
    assert_eq!("private_key", report["entries"][0]["kind"]);
    assert_eq!("server", report["entries"][0]["alias"]);
    assert_eq!(16, report["entries"][0]["encrypted_key_len"]);
    assert_eq!("certificate", report["entries"][1]["kind"]);
}

#[test]
fn test_jks_inspect_yaml_from_stdin() {
    keyloom()
        .args(["jks", "inspect", "-o", "yaml"])
        .write_stdin(keystore())
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: private_key"))
        .stdout(predicate::str::contains("alias: server"));
}

#[test]
fn test_jks_inspect_strips_garbage_header() {
    let mut bytes = vec![0x51, 0, 0, 0, 0, 0];
    bytes.extend(keystore());

    keyloom()
        .args(["jks", "inspect"])
        .write_stdin(bytes)
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 entries)"));
}

#[test]
fn test_jks_inspect_not_a_keystore() {
    keyloom()
        .args(["jks", "inspect"])
        .write_stdin("-----BEGIN CERTIFICATE-----\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JKS keystore"));
}

#[test]
fn test_jks_inspect_truncated_keystore() {
    let bytes = keystore();

    keyloom()
        .args(["jks", "inspect"])
        .write_stdin(&bytes[..bytes.len() - 3])
        .assert()
        .failure()
        .stderr(predicate::str::contains("keystore error"));
}

#[test]
fn test_jks_inspect_missing_file() {
    keyloom()
        .args(["jks", "inspect", "/nonexistent/store.jks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot read /nonexistent/store.jks",
        ));
}
