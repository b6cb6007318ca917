use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct BackfillDataResearcherRolesRequestResource {
    #[validate(range(min = 1))]
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BackfillDataResearcherRolesResponseResource {
    pub granted: u64,
}
