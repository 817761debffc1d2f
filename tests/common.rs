#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use kesimlog::db::{RecordStore, SqliteStore};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kl() -> Command {
    cargo_bin_cmd!("kesimlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kesimlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset through the CLI
pub fn init_db_with_data(db_path: &str) {
    kl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (len, tampon) in [("4,99", "sabit"), ("5.00", "hareketli"), ("10,99", "sabit"), ("11", "hareketli")] {
        kl().args(["--db", db_path, "add", len, "--tampon", tampon])
            .assert()
            .success();
    }
}

/// Insert a record with an explicit creation time via the library API
pub fn insert_at(db_path: &str, length: f64, tampon: &str, created_at: DateTime<Utc>) -> i64 {
    let mut store = SqliteStore::open(db_path).expect("open db");
    store.create_at(length, tampon, created_at).expect("insert")
}

/// Run `list --json` and return the parsed array
pub fn list_json(db_path: &str, group: &str) -> Vec<serde_json::Value> {
    let out = kl()
        .args(["--db", db_path, "list", "--group", group, "--json"])
        .output()
        .expect("run list");
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).expect("valid json")
}
