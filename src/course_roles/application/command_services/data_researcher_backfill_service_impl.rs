use std::sync::Arc;

use async_trait::async_trait;

use crate::course_roles::{
    application::listeners::data_researcher_grant_listener::DataResearcherGrantListener,
    domain::{
        model::{
            commands::backfill_data_researcher_roles_command::BackfillDataResearcherRolesCommand,
            enums::{
                course_roles_domain_error::CourseRolesDomainError,
                data_researcher_sync_outcome::DataResearcherSyncOutcome,
            },
        },
        services::{
            course_team_classifier::course_team_role_names,
            data_researcher_backfill_service::DataResearcherBackfillService,
        },
    },
    infrastructure::persistence::repositories::course_access_role_repository::{
        CourseAccessRoleFilter, CourseAccessRoleRepository,
    },
};

/// Applies the grant rule to assignments that existed before the listeners were registered.
pub struct DataResearcherBackfillServiceImpl {
    repository: Arc<dyn CourseAccessRoleRepository>,
    grant_listener: Arc<DataResearcherGrantListener>,
}

impl DataResearcherBackfillServiceImpl {
    pub fn new(
        repository: Arc<dyn CourseAccessRoleRepository>,
        grant_listener: Arc<DataResearcherGrantListener>,
    ) -> Self {
        Self {
            repository,
            grant_listener,
        }
    }
}

#[async_trait]
impl DataResearcherBackfillService for DataResearcherBackfillServiceImpl {
    async fn handle_backfill(
        &self,
        command: BackfillDataResearcherRolesCommand,
    ) -> Result<u64, CourseRolesDomainError> {
        let team_roles = self
            .repository
            .find(
                &CourseAccessRoleFilter::for_user(command.user_id())
                    .with_roles(course_team_role_names()),
            )
            .await?;

        let mut granted = 0;
        for role in &team_roles {
            if let Some(DataResearcherSyncOutcome::Granted) =
                self.grant_listener.ensure_derived_grant(role).await?
            {
                granted += 1;
            }
        }

        Ok(granted)
    }
}
