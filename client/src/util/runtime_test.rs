use super::*;

#[test]
fn from_js_date_applies_inverted_offset() {
    // 2026-10-16T03:00:00Z seen from IST, where getTimezoneOffset() is -330.
    let now = from_js_date(1_792_119_600_000.0, -330.0);
    assert_eq!(now.offset(), UtcOffset::from_hms(5, 30, 0).unwrap());
    assert_eq!(now.hour(), 8);
    assert_eq!(now.minute(), 30);
}

#[test]
fn from_js_date_utc() {
    let now = from_js_date(0.0, 0.0);
    assert_eq!(now, OffsetDateTime::UNIX_EPOCH);
}

#[test]
fn timeout_millis_saturates() {
    assert_eq!(timeout_millis(Duration::from_millis(3000)), 3000);
    assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 1000)), u32::MAX);
}

#[test]
fn schedule_and_spawn_are_inert_outside_the_browser() {
    let runtime = BrowserRuntime;
    runtime.spawn_detached(Box::pin(async {}));
    let _timer = runtime.schedule(Duration::from_millis(10), Box::new(|| {}));
}
