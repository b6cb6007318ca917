use async_trait::async_trait;

use crate::course_roles::domain::model::{
    entities::course_access_role::CourseAccessRole,
    enums::course_roles_domain_error::CourseRolesDomainError,
    queries::list_course_access_roles_query::ListCourseAccessRolesQuery,
};

#[async_trait]
pub trait CourseAccessRoleQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListCourseAccessRolesQuery,
    ) -> Result<Vec<CourseAccessRole>, CourseRolesDomainError>;
}
