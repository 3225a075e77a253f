use std::sync::Mutex;

use super::*;
use time::macros::datetime;

/// Collects `log` records so tests can see which channel a message took.
struct CaptureLogger(Mutex<Vec<String>>);

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut lines) = self.0.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger(Mutex::new(Vec::new()));

fn record() -> FeedbackRecord {
    FeedbackRecord {
        feedback: "calm".to_owned(),
        route_type: "calm".to_owned(),
        active_tab: "routes".to_owned(),
        timestamp: datetime!(2026-10-16 08:00:00 UTC),
    }
}

#[test]
fn check_status_accepts_2xx_only() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(403), Err(StoreError::Rejected { status: 403 }));
    assert_eq!(check_status(503), Err(StoreError::Rejected { status: 503 }));
}

#[test]
fn missing_config_yields_failing_store() {
    let store = store_for(Err(ConfigError::Missing { var: "SHEHER_FIRESTORE_PROJECT_ID" }));
    let result = futures::executor::block_on(store.append("feedback", record()));
    assert_eq!(
        result,
        Err(StoreError::Unconfigured("missing config value: SHEHER_FIRESTORE_PROJECT_ID".to_owned()))
    );
}

#[test]
fn firestore_store_does_not_write_from_server() {
    let config = FirestoreConfig::from_values(Some("p"), Some("k"), None).unwrap();
    let store = FirestoreStore::new(config);
    let result = futures::executor::block_on(store.append("feedback", record()));
    assert!(matches!(result, Err(StoreError::Unconfigured(_))));
}

#[test]
fn disabled_store_is_reported_through_log() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);

    let _store = store_for(Err(ConfigError::Missing { var: "SHEHER_FIRESTORE_API_KEY" }));

    let lines = LOGGER.0.lock().unwrap();
    assert!(
        lines
            .iter()
            .any(|l| l == "WARN feedback store disabled: missing config value: SHEHER_FIRESTORE_API_KEY"),
        "got {lines:?}"
    );
}
