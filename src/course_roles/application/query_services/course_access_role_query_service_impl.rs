use std::sync::Arc;

use async_trait::async_trait;

use crate::course_roles::{
    domain::{
        model::{
            entities::course_access_role::CourseAccessRole,
            enums::course_roles_domain_error::CourseRolesDomainError,
            queries::list_course_access_roles_query::ListCourseAccessRolesQuery,
        },
        services::course_access_role_query_service::CourseAccessRoleQueryService,
    },
    infrastructure::persistence::repositories::course_access_role_repository::{
        CourseAccessRoleFilter, CourseAccessRoleRepository,
    },
};

pub struct CourseAccessRoleQueryServiceImpl {
    repository: Arc<dyn CourseAccessRoleRepository>,
}

impl CourseAccessRoleQueryServiceImpl {
    pub fn new(repository: Arc<dyn CourseAccessRoleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CourseAccessRoleQueryService for CourseAccessRoleQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListCourseAccessRolesQuery,
    ) -> Result<Vec<CourseAccessRole>, CourseRolesDomainError> {
        let mut filter = CourseAccessRoleFilter::for_user(query.user_id());
        if let Some(course_id) = query.course_id() {
            filter = filter.in_course(course_id.clone());
        }

        self.repository.find(&filter).await
    }
}
