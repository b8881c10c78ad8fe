use smarter_domain::staff::StaffRole;
use smarter_staff::error::StaffServiceError;
use smarter_staff::usecase::register::{
    ApproverCredentials, ProvisionSupervisorUseCase, RegisterStaffInput, RegisterStaffUseCase,
};

use crate::helpers::{
    ADMIN_ID, ADMIN_PASSWORD, DOCTOR_ID, FailingStaffRepo, MockHasher, MockStaffRepo,
    SUPERVISOR_ID, SUPERVISOR_PASSWORD, details, mock_hash, seeded_staff, staff_record,
};

fn usecase(repo: MockStaffRepo) -> RegisterStaffUseCase<MockStaffRepo, MockHasher> {
    RegisterStaffUseCase {
        staff: repo,
        hasher: MockHasher,
    }
}

fn approver(id: &str, password: &str) -> Option<ApproverCredentials> {
    Some(ApproverCredentials {
        id: id.to_owned(),
        password: password.to_owned(),
    })
}

fn input(user_id: &str, role: &str, approver: Option<ApproverCredentials>) -> RegisterStaffInput {
    RegisterStaffInput {
        role: role.to_owned(),
        details: details(user_id),
        approver,
    }
}

// ── Happy paths ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_doctor_approved_by_admin() {
    let repo = MockStaffRepo::new(seeded_staff());
    let records = repo.records_handle();

    let profile = usecase(repo)
        .execute(input("u1", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD)))
        .await
        .unwrap();

    assert_eq!(profile.user_id, "u1");
    assert_eq!(profile.role, StaffRole::Doctor);

    let records = records.lock().unwrap();
    let stored = records.iter().find(|r| r.user_id == "u1").unwrap();
    assert_eq!(stored.password_hash, mock_hash("abc12345"));
    assert_eq!(stored.approved_by.as_deref(), Some(ADMIN_ID));
}

#[tokio::test]
async fn should_register_admin_approved_by_supervisor() {
    let profile = usecase(MockStaffRepo::new(seeded_staff()))
        .execute(input(
            "adm-2",
            " Admin ",
            approver(SUPERVISOR_ID, SUPERVISOR_PASSWORD),
        ))
        .await
        .unwrap();
    assert_eq!(profile.role, StaffRole::Admin);
}

#[tokio::test]
async fn should_normalize_fields_before_storing() {
    let repo = MockStaffRepo::new(seeded_staff());
    let records = repo.records_handle();
    let mut req = input("ignored", "nurse", approver(ADMIN_ID, ADMIN_PASSWORD));
    req.details.user_id = "  nurse-9 ".to_owned();
    req.details.email = " Nurse.Nine@General.ORG ".to_owned();

    usecase(repo).execute(req).await.unwrap();

    let records = records.lock().unwrap();
    let stored = records.iter().find(|r| r.user_id == "nurse-9").unwrap();
    assert_eq!(stored.email, "nurse.nine@general.org");
}

// ── Role gating ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_unknown_role_before_other_checks() {
    // Every other field is invalid too; the role check wins.
    let mut req = input("", "janitor", None);
    req.details.email = "nope".to_owned();
    req.details.password = "1".to_owned();

    let result = usecase(MockStaffRepo::empty()).execute(req).await;
    assert!(
        matches!(result, Err(StaffServiceError::InvalidRole)),
        "expected InvalidRole, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_supervisor_self_registration() {
    let result = usecase(MockStaffRepo::new(seeded_staff()))
        .execute(input(
            "sup-2",
            "supervisor",
            approver(SUPERVISOR_ID, SUPERVISOR_PASSWORD),
        ))
        .await;
    assert!(
        matches!(result, Err(StaffServiceError::InvalidRole)),
        "expected InvalidRole, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_admin_without_supervisor_credentials() {
    let cases = [
        None,
        approver(SUPERVISOR_ID, "wrong"),
        approver("nobody", SUPERVISOR_PASSWORD),
        // An admin cannot approve another admin.
        approver(ADMIN_ID, ADMIN_PASSWORD),
        approver("", ""),
    ];
    for approver in cases {
        let repo = MockStaffRepo::new(seeded_staff());
        let records = repo.records_handle();
        let result = usecase(repo).execute(input("adm-2", "admin", approver)).await;
        assert!(
            matches!(
                result,
                Err(StaffServiceError::InvalidApproverCredentials(StaffRole::Supervisor))
            ),
            "expected invalid supervisor credentials, got {result:?}"
        );
        assert_eq!(records.lock().unwrap().len(), 3, "nothing persisted");
    }
}

#[tokio::test]
async fn should_reject_nurse_approved_by_supervisor() {
    let result = usecase(MockStaffRepo::new(seeded_staff()))
        .execute(input(
            "n-1",
            "nurse",
            approver(SUPERVISOR_ID, SUPERVISOR_PASSWORD),
        ))
        .await;
    assert!(
        matches!(
            result,
            Err(StaffServiceError::InvalidApproverCredentials(StaffRole::Admin))
        ),
        "expected invalid admin credentials, got {result:?}"
    );
}

// ── Validation ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_invalid_fields() {
    let mut bad_email = input("u1", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD));
    bad_email.details.email = "not-an-email".to_owned();
    let mut short_password = input("u2", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD));
    short_password.details.password = "12345".to_owned();
    let mut blank_name = input("u3", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD));
    blank_name.details.first_name = "   ".to_owned();

    for req in [bad_email, short_password, blank_name] {
        let result = usecase(MockStaffRepo::new(seeded_staff())).execute(req).await;
        assert!(
            matches!(result, Err(StaffServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }
}

// ── Uniqueness ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_duplicate_user_id() {
    let result = usecase(MockStaffRepo::new(seeded_staff()))
        .execute(input(DOCTOR_ID, "doctor", approver(ADMIN_ID, ADMIN_PASSWORD)))
        .await;
    assert!(
        matches!(result, Err(StaffServiceError::DuplicateUserId)),
        "expected DuplicateUserId, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_second_registration_with_same_user_id() {
    let repo = MockStaffRepo::new(seeded_staff());
    let records = repo.records_handle();
    let uc = usecase(repo);

    uc.execute(input("u1", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD)))
        .await
        .unwrap();
    let mut again = input("u1", "nurse", approver(ADMIN_ID, ADMIN_PASSWORD));
    again.details.email = "someone.else@general.org".to_owned();
    let result = uc.execute(again).await;

    assert!(
        matches!(result, Err(StaffServiceError::DuplicateUserId)),
        "expected DuplicateUserId, got {result:?}"
    );
    assert_eq!(records.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn should_reject_duplicate_email_case_insensitively() {
    let mut req = input("u1", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD));
    req.details.email = " DR-1@General.ORG ".to_owned();
    let result = usecase(MockStaffRepo::new(seeded_staff())).execute(req).await;
    assert!(
        matches!(result, Err(StaffServiceError::DuplicateEmail)),
        "expected DuplicateEmail, got {result:?}"
    );
}

#[tokio::test]
async fn should_map_insert_race_to_duplicate_error() {
    let repo = MockStaffRepo::new(seeded_staff())
        .with_racing(vec![staff_record("u1", StaffRole::Nurse, "x")]);
    let result = usecase(repo)
        .execute(input("u1", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD)))
        .await;
    assert!(
        matches!(result, Err(StaffServiceError::DuplicateUserId)),
        "expected DuplicateUserId, got {result:?}"
    );
}

#[tokio::test]
async fn should_propagate_store_faults_as_internal() {
    let uc = RegisterStaffUseCase {
        staff: FailingStaffRepo,
        hasher: MockHasher,
    };
    let result = uc
        .execute(input("u1", "doctor", approver(ADMIN_ID, ADMIN_PASSWORD)))
        .await;
    assert!(
        matches!(result, Err(StaffServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}

// ── ProvisionSupervisorUseCase ───────────────────────────────────────────────

#[tokio::test]
async fn should_provision_supervisor_without_approver() {
    let repo = MockStaffRepo::empty();
    let records = repo.records_handle();
    let uc = ProvisionSupervisorUseCase {
        staff: repo,
        hasher: MockHasher,
    };

    let profile = uc.execute(details("sup-9")).await.unwrap();

    assert_eq!(profile.role, StaffRole::Supervisor);
    let records = records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].approved_by.is_none());
}

#[tokio::test]
async fn should_reject_provisioning_duplicate_user_id() {
    let uc = ProvisionSupervisorUseCase {
        staff: MockStaffRepo::new(seeded_staff()),
        hasher: MockHasher,
    };
    let result = uc.execute(details(SUPERVISOR_ID)).await;
    assert!(
        matches!(result, Err(StaffServiceError::DuplicateUserId)),
        "expected DuplicateUserId, got {result:?}"
    );
}
