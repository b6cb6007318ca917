use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateCourseAccessRoleRequestResource {
    #[validate(range(min = 1))]
    pub user_id: i64,
    /// Omit for an organization-wide assignment.
    #[validate(length(min = 1, max = 255))]
    pub course_id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub org: String,
    #[validate(length(min = 1, max = 64))]
    pub role: String,
}
