use async_trait::async_trait;

use crate::course_roles::domain::model::{
    commands::{
        create_course_access_role_command::CreateCourseAccessRoleCommand,
        delete_course_access_role_command::DeleteCourseAccessRoleCommand,
    },
    entities::course_access_role::CourseAccessRole,
    enums::course_roles_domain_error::CourseRolesDomainError,
};

#[async_trait]
pub trait CourseAccessRoleCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateCourseAccessRoleCommand,
    ) -> Result<CourseAccessRole, CourseRolesDomainError>;

    /// Returns how many assignments were removed.
    async fn handle_delete(
        &self,
        command: DeleteCourseAccessRoleCommand,
    ) -> Result<u64, CourseRolesDomainError>;
}
