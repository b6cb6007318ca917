use chrono::Utc;
use course_roles_ext::course_roles::domain::{
    model::{
        enums::{
            course_roles_domain_error::CourseRolesDomainError,
            data_researcher_sync_outcome::DataResearcherSyncOutcome,
        },
        events::course_access_role_created_event::CourseAccessRoleCreatedEvent,
        value_objects::course_role_name::{
            DATA_RESEARCHER_ROLE, INSTRUCTOR_ROLE, LIMITED_STAFF_ROLE, STAFF_ROLE,
        },
    },
    services::{
        course_access_role_command_service::CourseAccessRoleCommandService,
        course_access_role_listener::CourseAccessRoleListener,
    },
};

use crate::support::{
    COURSE_ID, ORG, OTHER_COURSE_ID, USER_ID, create_command, create_command_in,
    create_harness, stored_role,
};

#[tokio::test]
async fn each_course_team_role_grants_one_data_researcher_role() {
    for role in [INSTRUCTOR_ROLE, STAFF_ROLE, LIMITED_STAFF_ROLE] {
        let harness = create_harness();

        harness
            .command_service
            .handle_create(create_command(role))
            .await
            .expect("create should succeed");

        let granted = harness.repository.data_researcher_roles(USER_ID, COURSE_ID);
        assert_eq!(granted.len(), 1, "{role} should grant exactly once");
        assert_eq!(granted[0].org().value(), ORG);
        assert_eq!(
            harness.observer.outcomes(),
            vec![DataResearcherSyncOutcome::Granted]
        );
    }
}

#[tokio::test]
async fn granted_role_copies_the_triggering_org() {
    let harness = create_harness();

    harness
        .command_service
        .handle_create(create_command_in(Some(COURSE_ID), "PartnerU", STAFF_ROLE))
        .await
        .expect("create should succeed");

    let granted = harness.repository.data_researcher_roles(USER_ID, COURSE_ID);
    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0].org().value(), "PartnerU");
}

#[tokio::test]
async fn existing_data_researcher_role_is_not_duplicated() {
    let harness = create_harness();
    harness
        .repository
        .seed(vec![stored_role(Some(COURSE_ID), DATA_RESEARCHER_ROLE)]);

    harness
        .command_service
        .handle_create(create_command(INSTRUCTOR_ROLE))
        .await
        .expect("create should succeed");

    assert_eq!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .len(),
        1
    );
    assert_eq!(harness.repository.create_calls(), 1);
    assert_eq!(
        harness.observer.outcomes(),
        vec![DataResearcherSyncOutcome::AlreadyGranted]
    );
}

#[tokio::test]
async fn non_team_role_does_not_grant() {
    let harness = create_harness();

    harness
        .command_service
        .handle_create(create_command("beta_tester"))
        .await
        .expect("create should succeed");

    assert!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .is_empty()
    );
    assert!(harness.observer.events().is_empty());
}

#[tokio::test]
async fn org_scoped_instructor_does_not_grant() {
    let harness = create_harness();

    harness
        .command_service
        .handle_create(create_command_in(None, ORG, INSTRUCTOR_ROLE))
        .await
        .expect("create should succeed");

    assert_eq!(harness.repository.all().len(), 1);
    assert!(harness.observer.events().is_empty());
}

#[tokio::test]
async fn grant_in_one_course_ignores_grants_in_other_courses() {
    let harness = create_harness();
    harness
        .repository
        .seed(vec![stored_role(Some(OTHER_COURSE_ID), DATA_RESEARCHER_ROLE)]);

    harness
        .command_service
        .handle_create(create_command(STAFF_ROLE))
        .await
        .expect("create should succeed");

    assert_eq!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .len(),
        1
    );
    assert_eq!(
        harness
            .repository
            .data_researcher_roles(USER_ID, OTHER_COURSE_ID)
            .len(),
        1
    );
}

#[tokio::test]
async fn creating_data_researcher_directly_triggers_nothing() {
    let harness = create_harness();

    harness
        .command_service
        .handle_create(create_command(DATA_RESEARCHER_ROLE))
        .await
        .expect("create should succeed");

    assert_eq!(harness.repository.create_calls(), 1);
    assert!(harness.observer.events().is_empty());
}

#[tokio::test]
async fn concurrent_grant_conflict_is_treated_as_granted() {
    let harness = create_harness();
    harness.repository.race_next_derived_create();

    let result = harness
        .command_service
        .handle_create(create_command(LIMITED_STAFF_ROLE))
        .await;

    assert!(result.is_ok());
    assert_eq!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .len(),
        1
    );
    assert_eq!(
        harness.observer.outcomes(),
        vec![DataResearcherSyncOutcome::GrantConflictResolved]
    );
}

#[tokio::test]
async fn store_failure_during_grant_reaches_the_caller() {
    let harness = create_harness();
    harness.repository.fail_creates_for_role(DATA_RESEARCHER_ROLE);

    let result = harness
        .command_service
        .handle_create(create_command(INSTRUCTOR_ROLE))
        .await;

    assert!(matches!(
        result,
        Err(CourseRolesDomainError::InfrastructureError(_))
    ));
    assert!(
        harness
            .repository
            .roles_in(USER_ID, COURSE_ID, INSTRUCTOR_ROLE)
            .is_empty()
    );
    assert!(harness.observer.events().is_empty());
}

#[tokio::test]
async fn retry_after_failed_grant_creates_both_roles() {
    let harness = create_harness();
    harness.repository.fail_creates_for_role(DATA_RESEARCHER_ROLE);
    harness
        .command_service
        .handle_create(create_command(INSTRUCTOR_ROLE))
        .await
        .expect_err("grant store is down");

    harness.repository.recover();
    harness
        .command_service
        .handle_create(create_command(INSTRUCTOR_ROLE))
        .await
        .expect("retry should succeed");

    assert_eq!(
        harness
            .repository
            .roles_in(USER_ID, COURSE_ID, INSTRUCTOR_ROLE)
            .len(),
        1
    );
    assert_eq!(
        harness.repository.data_researcher_roles(USER_ID, COURSE_ID).len(),
        1
    );
    assert_eq!(
        harness.observer.outcomes(),
        vec![DataResearcherSyncOutcome::Granted]
    );
}

#[tokio::test]
async fn library_scoped_team_role_grants_data_researcher() {
    let harness = create_harness();
    let library = "library-v1:EduX+Lib1";

    harness
        .command_service
        .handle_create(create_command_in(Some(library), ORG, STAFF_ROLE))
        .await
        .expect("library keys are accepted");

    assert_eq!(harness.repository.data_researcher_roles(USER_ID, library).len(), 1);
}

#[tokio::test]
async fn ensure_derived_grant_skips_roles_outside_the_course_team() {
    let harness = create_harness();

    let outcome = harness
        .grant_listener
        .ensure_derived_grant(&stored_role(Some(COURSE_ID), "beta_tester"))
        .await
        .expect("classification never fails");

    assert!(outcome.is_none());
    assert_eq!(harness.repository.create_calls(), 0);
}

#[tokio::test]
async fn on_created_reacts_to_an_event_without_the_command_service() {
    let harness = create_harness();
    let event = CourseAccessRoleCreatedEvent::new(
        stored_role(Some(COURSE_ID), INSTRUCTOR_ROLE),
        Utc::now(),
    );

    harness
        .grant_listener
        .on_created(&event)
        .await
        .expect("grant should succeed");

    let events = harness.observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].user_id.value(), USER_ID);
    assert_eq!(events[0].course_id.value(), COURSE_ID);
    assert_eq!(events[0].trigger_role.value(), INSTRUCTOR_ROLE);
    assert_eq!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .len(),
        1
    );
}
