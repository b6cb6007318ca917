use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use course_roles_ext::course_roles::{
    application::events::course_access_role_event_dispatcher::CourseAccessRoleEventDispatcher,
    domain::{
        model::{
            enums::{
                course_roles_domain_error::CourseRolesDomainError,
                data_researcher_sync_outcome::DataResearcherSyncOutcome,
            },
            events::{
                course_access_role_created_event::CourseAccessRoleCreatedEvent,
                course_access_role_deleted_event::CourseAccessRoleDeletedEvent,
            },
            value_objects::course_role_name::{
                DATA_RESEARCHER_ROLE, INSTRUCTOR_ROLE, LIMITED_STAFF_ROLE, STAFF_ROLE,
            },
        },
        services::{
            course_access_role_command_service::CourseAccessRoleCommandService,
            course_access_role_listener::CourseAccessRoleListener,
        },
    },
};

use crate::support::{
    COURSE_ID, ORG, USER_ID, create_command, create_harness, create_harness_without_listeners,
    delete_command, stored_role,
};

#[tokio::test]
async fn data_researcher_role_follows_the_course_team_lifecycle() {
    let harness = create_harness();

    harness
        .command_service
        .handle_create(create_command(LIMITED_STAFF_ROLE))
        .await
        .expect("limited staff assigned");
    let granted = harness.repository.data_researcher_roles(USER_ID, COURSE_ID);
    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0].org().value(), ORG);

    harness
        .command_service
        .handle_create(create_command(STAFF_ROLE))
        .await
        .expect("staff assigned");
    assert_eq!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .len(),
        1
    );

    harness
        .command_service
        .handle_delete(delete_command(LIMITED_STAFF_ROLE))
        .await
        .expect("limited staff removed");
    assert_eq!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .len(),
        1
    );

    harness
        .command_service
        .handle_delete(delete_command(STAFF_ROLE))
        .await
        .expect("staff removed");
    assert!(
        harness
            .repository
            .data_researcher_roles(USER_ID, COURSE_ID)
            .is_empty()
    );

    assert_eq!(
        harness.observer.outcomes(),
        vec![
            DataResearcherSyncOutcome::Granted,
            DataResearcherSyncOutcome::AlreadyGranted,
            DataResearcherSyncOutcome::RetainedByRemainingRole,
            DataResearcherSyncOutcome::Revoked,
        ]
    );
}

#[tokio::test]
async fn handle_create_returns_the_stored_assignment() {
    let harness = create_harness();

    let role = harness
        .command_service
        .handle_create(create_command(INSTRUCTOR_ROLE))
        .await
        .expect("create should succeed");

    assert_eq!(role.user_id().value(), USER_ID);
    assert_eq!(role.course_id().map(|c| c.value()), Some(COURSE_ID));
    assert_eq!(role.role().value(), INSTRUCTOR_ROLE);
    assert_eq!(harness.repository.all().len(), 2);
}

#[tokio::test]
async fn duplicate_assignment_is_reported_as_conflict() {
    let harness = create_harness();
    harness
        .command_service
        .handle_create(create_command(STAFF_ROLE))
        .await
        .expect("first create should succeed");

    let result = harness
        .command_service
        .handle_create(create_command(STAFF_ROLE))
        .await;

    assert!(matches!(
        result,
        Err(CourseRolesDomainError::RoleAssignmentConflict)
    ));
    assert_eq!(harness.observer.outcomes().len(), 1);
}

#[tokio::test]
async fn without_registered_listeners_no_role_is_derived() {
    let harness = create_harness_without_listeners();

    harness
        .command_service
        .handle_create(create_command(INSTRUCTOR_ROLE))
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
async fn deleting_data_researcher_directly_does_not_touch_team_roles() {
    let harness = create_harness();
    harness.repository.seed(vec![
        stored_role(Some(COURSE_ID), INSTRUCTOR_ROLE),
        stored_role(Some(COURSE_ID), DATA_RESEARCHER_ROLE),
    ]);

    let deleted = harness
        .command_service
        .handle_delete(delete_command(DATA_RESEARCHER_ROLE))
        .await
        .expect("delete should succeed");

    assert_eq!(deleted, 1);
    assert_eq!(
        harness
            .repository
            .roles_in(USER_ID, COURSE_ID, INSTRUCTOR_ROLE)
            .len(),
        1
    );
    assert!(harness.observer.events().is_empty());
}

struct FailingListener;

#[async_trait]
impl CourseAccessRoleListener for FailingListener {
    async fn on_created(
        &self,
        _event: &CourseAccessRoleCreatedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        Err(CourseRolesDomainError::InfrastructureError(
            "listener failed".to_string(),
        ))
    }
}

#[derive(Default)]
struct CountingListener {
    created: AtomicUsize,
}

#[async_trait]
impl CourseAccessRoleListener for CountingListener {
    async fn on_created(
        &self,
        _event: &CourseAccessRoleCreatedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn dispatcher_stops_at_the_first_listener_error() {
    let counting = Arc::new(CountingListener::default());
    let dispatcher = CourseAccessRoleEventDispatcher::new()
        .with_listener(counting.clone())
        .with_listener(Arc::new(FailingListener))
        .with_listener(counting.clone());
    let event = CourseAccessRoleCreatedEvent::new(
        stored_role(Some(COURSE_ID), INSTRUCTOR_ROLE),
        Utc::now(),
    );

    let result = dispatcher.publish_created(&event).await;

    assert!(matches!(
        result,
        Err(CourseRolesDomainError::InfrastructureError(_))
    ));
    assert_eq!(counting.created.load(Ordering::SeqCst), 1);
    assert_eq!(dispatcher.listener_count(), 3);
}

#[tokio::test]
async fn dispatcher_default_hooks_ignore_deletions() {
    let counting = Arc::new(CountingListener::default());
    let dispatcher = CourseAccessRoleEventDispatcher::new().with_listener(counting.clone());
    let event = CourseAccessRoleDeletedEvent::new(
        stored_role(Some(COURSE_ID), INSTRUCTOR_ROLE),
        Utc::now(),
    );

    dispatcher
        .publish_deleted(&event)
        .await
        .expect("default hook succeeds");

    assert_eq!(counting.created.load(Ordering::SeqCst), 0);
}
