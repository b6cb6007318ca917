use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::course_roles::{
    domain::{
        model::{
            entities::course_access_role::CourseAccessRole,
            enums::{
                course_roles_domain_error::CourseRolesDomainError,
                data_researcher_sync_outcome::DataResearcherSyncOutcome,
            },
            events::{
                course_access_role_created_event::CourseAccessRoleCreatedEvent,
                data_researcher_role_synced_event::DataResearcherRoleSyncedEvent,
            },
            value_objects::course_role_name::CourseRoleName,
        },
        services::{
            course_access_role_listener::CourseAccessRoleListener,
            course_team_classifier::is_course_team_role,
            data_researcher_sync_observer::DataResearcherSyncObserver,
        },
    },
    infrastructure::persistence::repositories::course_access_role_repository::{
        CourseAccessRoleFilter, CourseAccessRoleRepository, NewCourseAccessRoleRecord,
    },
};

/// Grants data researcher in a course whenever a course-team role is created there.
pub struct DataResearcherGrantListener {
    repository: Arc<dyn CourseAccessRoleRepository>,
    observer: Arc<dyn DataResearcherSyncObserver>,
}

impl DataResearcherGrantListener {
    pub fn new(
        repository: Arc<dyn CourseAccessRoleRepository>,
        observer: Arc<dyn DataResearcherSyncObserver>,
    ) -> Self {
        Self {
            repository,
            observer,
        }
    }

    /// Returns `None` when `role` is not a course-team role and nothing was checked.
    pub async fn ensure_derived_grant(
        &self,
        role: &CourseAccessRole,
    ) -> Result<Option<DataResearcherSyncOutcome>, CourseRolesDomainError> {
        let course_id = match role.course_id() {
            Some(course_id) if is_course_team_role(role) => course_id,
            _ => return Ok(None),
        };

        let derived_filter = CourseAccessRoleFilter::for_user(role.user_id())
            .in_course(course_id.clone())
            .with_roles(vec![CourseRoleName::data_researcher()]);

        let outcome = if self.repository.exists(&derived_filter).await? {
            DataResearcherSyncOutcome::AlreadyGranted
        } else {
            let created = self
                .repository
                .create(NewCourseAccessRoleRecord {
                    user_id: role.user_id(),
                    course_id: Some(course_id.clone()),
                    org: role.org().clone(),
                    role: CourseRoleName::data_researcher(),
                })
                .await;

            match created {
                Ok(_) => DataResearcherSyncOutcome::Granted,
                Err(CourseRolesDomainError::RoleAssignmentConflict) => {
                    DataResearcherSyncOutcome::GrantConflictResolved
                }
                Err(error) => return Err(error),
            }
        };

        self.observer.record(&DataResearcherRoleSyncedEvent {
            user_id: role.user_id(),
            course_id: course_id.clone(),
            org: role.org().clone(),
            trigger_role: role.role().clone(),
            outcome,
            removed_count: 0,
            occurred_at: Utc::now(),
        });

        Ok(Some(outcome))
    }
}

#[async_trait]
impl CourseAccessRoleListener for DataResearcherGrantListener {
    async fn on_created(
        &self,
        event: &CourseAccessRoleCreatedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        self.ensure_derived_grant(&event.role).await?;
        Ok(())
    }
}
