use async_trait::async_trait;

use crate::course_roles::domain::model::{
    commands::backfill_data_researcher_roles_command::BackfillDataResearcherRolesCommand,
    enums::course_roles_domain_error::CourseRolesDomainError,
};

#[async_trait]
pub trait DataResearcherBackfillService: Send + Sync {
    /// Returns the number of data researcher grants created.
    async fn handle_backfill(
        &self,
        command: BackfillDataResearcherRolesCommand,
    ) -> Result<u64, CourseRolesDomainError>;
}
