use async_trait::async_trait;

use crate::course_roles::domain::model::{
    enums::course_roles_domain_error::CourseRolesDomainError,
    events::{
        course_access_role_created_event::CourseAccessRoleCreatedEvent,
        course_access_role_deleted_event::CourseAccessRoleDeletedEvent,
    },
};

/// Observer of course access role writes. Runs inline with the write that raised the
/// event, so an error here fails that write.
#[async_trait]
pub trait CourseAccessRoleListener: Send + Sync {
    async fn on_created(
        &self,
        _event: &CourseAccessRoleCreatedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        Ok(())
    }

    async fn on_deleted(
        &self,
        _event: &CourseAccessRoleDeletedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        Ok(())
    }
}
