use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::course_roles::domain::model::entities::course_access_role::CourseAccessRole;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CourseAccessRoleResource {
    pub id: String,
    pub user_id: i64,
    pub course_id: Option<String>,
    pub org: String,
    pub role: String,
    pub created_at: String,
}

impl From<CourseAccessRole> for CourseAccessRoleResource {
    fn from(role: CourseAccessRole) -> Self {
        Self {
            id: role.id().value().to_string(),
            user_id: role.user_id().value(),
            course_id: role.course_id().map(|c| c.value().to_string()),
            org: role.org().value().to_string(),
            role: role.role().value().to_string(),
            created_at: role.created_at().to_rfc3339(),
        }
    }
}
