use smarter_auth_types::token::{SessionKey, validate_session_token};
use smarter_domain::staff::StaffRole;
use smarter_staff::error::StaffServiceError;
use smarter_staff::usecase::session::{CheckSessionInput, CheckSessionUseCase, start_session};

use crate::helpers::{DOCTOR_ID, MockStaffRepo, seeded_staff};

const TEST_SESSION_SECRET: &str = "session-test-secret";

fn check(user_id: &str, role: StaffRole) -> CheckSessionInput {
    CheckSessionInput {
        user_id: user_id.to_owned(),
        role,
    }
}

#[tokio::test]
async fn should_issue_session_that_validates() {
    let key = SessionKey::new(TEST_SESSION_SECRET);
    let profile = seeded_staff()[2].profile();

    let session = start_session(&profile, &key, 600).unwrap();

    let info = validate_session_token(&session.token, &key).unwrap();
    assert_eq!(info.user_id, DOCTOR_ID);
    assert_eq!(info.role, StaffRole::Doctor);
    assert_eq!(info.expires_at, session.expires_at);
}

#[tokio::test]
async fn should_resolve_session_to_current_profile() {
    let uc = CheckSessionUseCase {
        staff: MockStaffRepo::new(seeded_staff()),
    };
    let profile = uc.execute(check(DOCTOR_ID, StaffRole::Doctor)).await.unwrap();
    assert_eq!(profile.user_id, DOCTOR_ID);
}

#[tokio::test]
async fn should_reject_session_for_missing_staff() {
    let uc = CheckSessionUseCase {
        staff: MockStaffRepo::empty(),
    };
    let result = uc.execute(check(DOCTOR_ID, StaffRole::Doctor)).await;
    assert!(
        matches!(result, Err(StaffServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_session_with_stale_role() {
    let uc = CheckSessionUseCase {
        staff: MockStaffRepo::new(seeded_staff()),
    };
    let result = uc.execute(check(DOCTOR_ID, StaffRole::Admin)).await;
    assert!(
        matches!(result, Err(StaffServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}
