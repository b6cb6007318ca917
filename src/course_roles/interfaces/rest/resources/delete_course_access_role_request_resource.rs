use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct DeleteCourseAccessRoleRequestResource {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub course_id: Option<String>,
    #[validate(length(max = 255))]
    pub org: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DeleteCourseAccessRoleResponseResource {
    pub deleted: u64,
}
