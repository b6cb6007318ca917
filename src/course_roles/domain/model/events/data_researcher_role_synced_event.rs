use chrono::{DateTime, Utc};

use crate::course_roles::domain::model::{
    enums::data_researcher_sync_outcome::DataResearcherSyncOutcome,
    value_objects::{
        course_key::CourseKey, course_role_name::CourseRoleName, org_name::OrgName,
        user_id::UserId,
    },
};

#[derive(Clone, Debug)]
pub struct DataResearcherRoleSyncedEvent {
    pub user_id: UserId,
    pub course_id: CourseKey,
    pub org: OrgName,
    pub trigger_role: CourseRoleName,
    pub outcome: DataResearcherSyncOutcome,
    pub removed_count: u64,
    pub occurred_at: DateTime<Utc>,
}
