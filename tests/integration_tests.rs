use chrono::{Duration, Utc};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, insert_at, kl, list_json, setup_test_db};

fn lengths(rows: &[serde_json::Value]) -> Vec<f64> {
    rows.iter().map(|r| r["length"].as_f64().unwrap()).collect()
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    kl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_accepts_comma_and_rounds() {
    let db_path = setup_test_db("add_comma");
    kl().args(["--db", &db_path, "--test", "init"]).assert().success();

    kl().args(["--db", &db_path, "add", "7,456", "--tampon", "hareketli"])
        .assert()
        .success()
        .stdout(contains("7.46 m (Hareketli)"));

    let rows = list_json(&db_path, "all");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["length"].as_f64().unwrap(), 7.46);
    assert_eq!(rows[0]["buffer_type"], "Hareketli");
}

#[test]
fn test_add_rejects_non_numeric_length() {
    let db_path = setup_test_db("add_invalid");
    kl().args(["--db", &db_path, "--test", "init"]).assert().success();

    kl().args(["--db", &db_path, "add", "abc"])
        .assert()
        .failure()
        .stderr(contains("Length must be numeric"));

    assert!(list_json(&db_path, "all").is_empty());
}

#[test]
fn test_new_record_is_recent_with_fresh_id() {
    let db_path = setup_test_db("new_recent");
    init_db_with_data(&db_path);

    let before = list_json(&db_path, "all");
    let old_ids: Vec<i64> = before.iter().map(|r| r["id"].as_i64().unwrap()).collect();

    kl().args(["--db", &db_path, "add", "6.5"]).assert().success();

    let after = list_json(&db_path, "all");
    let last = after.last().unwrap();
    assert!(!old_ids.contains(&last["id"].as_i64().unwrap()));
    assert_eq!(last["recent"], true);

    let created: chrono::DateTime<Utc> = last["created_at"].as_str().unwrap().parse().unwrap();
    assert!((Utc::now() - created) < Duration::seconds(30));
}

#[test]
fn test_update_keeps_created_at_and_id() {
    let db_path = setup_test_db("update_keeps");
    kl().args(["--db", &db_path, "--test", "init"]).assert().success();
    let id = insert_at(&db_path, 6.0, "Sabit", Utc::now() - Duration::hours(3));

    let before = list_json(&db_path, "all");

    kl().args(["--db", &db_path, "update", &id.to_string(), "9,25", "--tampon", "hareketli"])
        .assert()
        .success()
        .stdout(contains("updated"));

    let after = list_json(&db_path, "all");
    assert_eq!(after[0]["id"], before[0]["id"]);
    assert_eq!(after[0]["created_at"], before[0]["created_at"]);
    assert_eq!(after[0]["length"].as_f64().unwrap(), 9.25);
    assert_eq!(after[0]["buffer_type"], "Hareketli");
}

#[test]
fn test_update_missing_record_fails() {
    let db_path = setup_test_db("update_missing");
    kl().args(["--db", &db_path, "--test", "init"]).assert().success();

    kl().args(["--db", &db_path, "update", "42", "5"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_delete_twice_reports_error() {
    let db_path = setup_test_db("delete_twice");
    kl().args(["--db", &db_path, "--test", "init"]).assert().success();
    let id = insert_at(&db_path, 6.0, "Sabit", Utc::now()).to_string();

    kl().args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    assert!(list_json(&db_path, "all").is_empty());

    kl().args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let db_path = setup_test_db("delete_confirm");
    kl().args(["--db", &db_path, "--test", "init"]).assert().success();
    let id = insert_at(&db_path, 6.0, "Sabit", Utc::now()).to_string();

    kl().args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));
    assert_eq!(list_json(&db_path, "all").len(), 1);

    kl().args(["--db", &db_path, "del", &id])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(list_json(&db_path, "all").is_empty());
}

#[test]
fn test_list_group_other_boundaries() {
    let db_path = setup_test_db("group_other");
    init_db_with_data(&db_path);

    assert_eq!(lengths(&list_json(&db_path, "other")), vec![4.99, 11.0]);
    assert_eq!(lengths(&list_json(&db_path, "diger")), vec![4.99, 11.0]);
    assert_eq!(lengths(&list_json(&db_path, "5")), vec![5.0]);
    assert_eq!(lengths(&list_json(&db_path, "10")), vec![10.99]);
    assert_eq!(list_json(&db_path, "hepsi").len(), 4);
}

#[test]
fn test_list_invalid_group_fails() {
    let db_path = setup_test_db("group_invalid");
    init_db_with_data(&db_path);

    kl().args(["--db", &db_path, "list", "--group", "12"])
        .assert()
        .failure()
        .stderr(contains("Invalid group"));
}

#[test]
fn test_list_orders_oldest_first_and_marks_recent() {
    let db_path = setup_test_db("list_order");
    kl().args(["--db", &db_path, "--test", "init"]).assert().success();

    let fresh = insert_at(&db_path, 7.0, "Sabit", Utc::now());
    let old = insert_at(&db_path, 8.0, "Sabit", Utc::now() - Duration::hours(25));

    let rows = list_json(&db_path, "all");
    assert_eq!(rows[0]["id"].as_i64().unwrap(), old);
    assert_eq!(rows[0]["recent"], false);
    assert_eq!(rows[1]["id"].as_i64().unwrap(), fresh);
    assert_eq!(rows[1]["recent"], true);

    kl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("7.00").and(contains("8.00")))
        .stdout(contains("1 from the last 24 hours"));
}
