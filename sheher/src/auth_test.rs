use super::*;

// =============================================================
// FixedCredentials
// =============================================================

#[test]
fn demo_pair_is_accepted() {
    assert!(FixedCredentials::demo().verify("admin", "password"));
}

#[test]
fn demo_rejects_everything_else() {
    let gate = FixedCredentials::demo();
    let rejected = [
        ("Admin", "password"),
        ("admin", "Password"),
        ("ADMIN", "PASSWORD"),
        ("admin ", "password"),
        ("admin", ""),
        ("", "password"),
        ("", ""),
        ("password", "admin"),
    ];
    for (user, pass) in rejected {
        assert!(!gate.verify(user, pass), "{user:?}/{pass:?} should be rejected");
    }
}

#[test]
fn closures_act_as_verifiers() {
    let provider = |user: &str, _pass: &str| user.ends_with("@udaipur.in");
    assert!(provider.verify("meera@udaipur.in", "x"));
    assert!(!provider.verify("meera@example.com", "x"));
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_anonymous_with_default_name() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.user_name(), DEFAULT_USER_NAME);
}

#[test]
fn open_marks_session_authenticated_and_keeps_name() {
    let mut session = Session::default();
    session.open();
    assert!(session.is_authenticated());
    assert_eq!(session.user_name(), DEFAULT_USER_NAME);
}

#[test]
fn end_resets_to_default() {
    let mut session = Session::default();
    session.open();
    session.end();
    assert_eq!(session, Session::default());
}

#[test]
fn rejection_error_message() {
    assert_eq!(AuthError::Rejected.to_string(), "invalid username or password");
}
