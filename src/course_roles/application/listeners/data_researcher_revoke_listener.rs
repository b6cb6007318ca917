use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::course_roles::{
    domain::{
        model::{
            enums::{
                course_roles_domain_error::CourseRolesDomainError,
                data_researcher_sync_outcome::DataResearcherSyncOutcome,
            },
            events::{
                course_access_role_deleted_event::CourseAccessRoleDeletedEvent,
                data_researcher_role_synced_event::DataResearcherRoleSyncedEvent,
            },
            value_objects::{
                course_key::CourseKey, course_role_name::CourseRoleName, user_id::UserId,
            },
        },
        services::{
            course_access_role_listener::CourseAccessRoleListener,
            course_team_classifier::{course_team_role_names, is_course_team_role},
            data_researcher_sync_observer::DataResearcherSyncObserver,
        },
    },
    infrastructure::persistence::repositories::course_access_role_repository::{
        CourseAccessRoleFilter, CourseAccessRoleRepository,
    },
};

/// Revokes data researcher in a course once the user holds no course-team role there.
pub struct DataResearcherRevokeListener {
    repository: Arc<dyn CourseAccessRoleRepository>,
    observer: Arc<dyn DataResearcherSyncObserver>,
}

impl DataResearcherRevokeListener {
    pub fn new(
        repository: Arc<dyn CourseAccessRoleRepository>,
        observer: Arc<dyn DataResearcherSyncObserver>,
    ) -> Self {
        Self {
            repository,
            observer,
        }
    }

    /// Deletes every data researcher assignment of the user in the course, manually
    /// granted ones included, since assignments carry no provenance.
    pub async fn remove_derived_grant(
        &self,
        user_id: UserId,
        course_id: &CourseKey,
    ) -> Result<u64, CourseRolesDomainError> {
        let derived_filter = CourseAccessRoleFilter::for_user(user_id)
            .in_course(course_id.clone())
            .with_roles(vec![CourseRoleName::data_researcher()]);

        self.repository.delete(&derived_filter).await
    }
}

#[async_trait]
impl CourseAccessRoleListener for DataResearcherRevokeListener {
    async fn on_deleted(
        &self,
        event: &CourseAccessRoleDeletedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        let role = &event.role;
        let course_id = match role.course_id() {
            Some(course_id) if is_course_team_role(role) => course_id,
            _ => return Ok(()),
        };

        let remaining_filter = CourseAccessRoleFilter::for_user(role.user_id())
            .in_course(course_id.clone())
            .with_roles(course_team_role_names());

        let (outcome, removed_count) = if self.repository.exists(&remaining_filter).await? {
            (DataResearcherSyncOutcome::RetainedByRemainingRole, 0)
        } else {
            let removed = self.remove_derived_grant(role.user_id(), course_id).await?;
            if removed > 0 {
                (DataResearcherSyncOutcome::Revoked, removed)
            } else {
                (DataResearcherSyncOutcome::NothingToRevoke, 0)
            }
        };

        self.observer.record(&DataResearcherRoleSyncedEvent {
            user_id: role.user_id(),
            course_id: course_id.clone(),
            org: role.org().clone(),
            trigger_role: role.role().clone(),
            outcome,
            removed_count,
            occurred_at: Utc::now(),
        });

        Ok(())
    }
}
