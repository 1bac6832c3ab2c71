use tempfile::TempDir;
use vlc_updater::version::history::HistoryStore;
use vlc_updater::version::types::{CheckResult, CheckStatus};

fn sample(latest: &str) -> CheckResult {
    CheckResult::ok(
        "2026-01-01T00:00:00+00:00".to_string(),
        Some("3.0.20".to_string()),
        latest.to_string(),
        Some(1),
        "https://example.com/vlc".to_string(),
    )
}

#[test]
fn insert_then_list_returns_stored_record() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.sqlite3");
    let store = HistoryStore::open(&db_path).unwrap();
    store.initialize().unwrap();

    let id = store.insert(&sample("3.0.21")).unwrap();
    let rows = store.list_recent(20).unwrap();

    assert_eq!(id, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].check.latest_version.as_deref(), Some("3.0.21"));
    assert_eq!(rows[0].check.status, CheckStatus::Ok);
}

#[test]
fn list_recent_never_exceeds_limit_and_is_strictly_descending() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.sqlite3");
    let store = HistoryStore::open(&db_path).unwrap();
    store.initialize().unwrap();

    for patch in 0..10 {
        store.insert(&sample(&format!("3.0.{}", patch))).unwrap();
    }

    for limit in [1, 3, 10, 50] {
        let rows = store.list_recent(limit).unwrap();
        assert!(rows.len() <= limit as usize);
        assert!(rows.windows(2).all(|w| w[0].id > w[1].id));
    }
    assert_eq!(store.list_recent(50).unwrap().len(), 10);
}

#[test]
fn rows_survive_reopening_the_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.sqlite3");

    let id = {
        let store = HistoryStore::open(&db_path).unwrap();
        store.initialize().unwrap();
        store.insert(&sample("3.0.21")).unwrap()
    };

    let store = HistoryStore::open(&db_path).unwrap();
    store.initialize().unwrap();
    let rows = store.list_recent(1).unwrap();

    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].check, sample("3.0.21"));
}
