use smarter_domain::staff::StaffRole;
use smarter_staff::error::StaffServiceError;
use smarter_staff::usecase::verify::{VerifyApproverInput, VerifyApproverUseCase};

use crate::helpers::{
    ADMIN_ID, ADMIN_PASSWORD, FailingStaffRepo, MockHasher, MockStaffRepo, SUPERVISOR_ID,
    SUPERVISOR_PASSWORD, seeded_staff,
};

async fn verify(role: StaffRole, id: &str, password: &str) -> bool {
    let uc = VerifyApproverUseCase {
        staff: MockStaffRepo::new(seeded_staff()),
        hasher: MockHasher,
        role,
    };
    uc.execute(VerifyApproverInput {
        id: id.to_owned(),
        password: password.to_owned(),
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn should_accept_matching_supervisor() {
    assert!(verify(StaffRole::Supervisor, SUPERVISOR_ID, SUPERVISOR_PASSWORD).await);
}

#[tokio::test]
async fn should_accept_matching_admin() {
    assert!(verify(StaffRole::Admin, ADMIN_ID, ADMIN_PASSWORD).await);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    assert!(!verify(StaffRole::Supervisor, SUPERVISOR_ID, "nope").await);
}

#[tokio::test]
async fn should_reject_unknown_id() {
    assert!(!verify(StaffRole::Admin, "ghost", ADMIN_PASSWORD).await);
}

#[tokio::test]
async fn should_reject_holder_of_other_role() {
    // Valid credentials, but for an admin.
    assert!(!verify(StaffRole::Supervisor, ADMIN_ID, ADMIN_PASSWORD).await);
    assert!(!verify(StaffRole::Admin, SUPERVISOR_ID, SUPERVISOR_PASSWORD).await);
}

#[tokio::test]
async fn should_reject_blank_input() {
    assert!(!verify(StaffRole::Admin, "", "").await);
}

#[tokio::test]
async fn should_propagate_store_faults_as_internal() {
    let uc = VerifyApproverUseCase {
        staff: FailingStaffRepo,
        hasher: MockHasher,
        role: StaffRole::Admin,
    };
    let result = uc
        .execute(VerifyApproverInput {
            id: ADMIN_ID.to_owned(),
            password: ADMIN_PASSWORD.to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(StaffServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
