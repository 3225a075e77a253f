use super::*;
use time::macros::datetime;

fn sample_record() -> FeedbackRecord {
    FeedbackRecord {
        feedback: "okay".to_owned(),
        route_type: "calm".to_owned(),
        active_tab: "updates".to_owned(),
        timestamp: datetime!(2026-10-16 08:15:00 UTC),
    }
}

#[test]
fn unconfigured_store_fails_every_append() {
    let store = UnconfiguredStore::new("missing SHEHER_FIRESTORE_PROJECT_ID");
    let result = futures::executor::block_on(store.append("feedback", sample_record()));
    assert_eq!(result, Err(StoreError::Unconfigured("missing SHEHER_FIRESTORE_PROJECT_ID".to_owned())));
}

#[test]
fn store_error_messages() {
    assert_eq!(StoreError::Rejected { status: 403 }.to_string(), "store rejected write: status 403");
    assert_eq!(StoreError::Network("offline".into()).to_string(), "network error: offline");
    assert_eq!(StoreError::Serialization("bad".into()).to_string(), "serialization failed: bad");
}
