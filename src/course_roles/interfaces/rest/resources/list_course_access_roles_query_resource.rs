use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListCourseAccessRolesQueryResource {
    pub user_id: i64,
    pub course_id: Option<String>,
}
