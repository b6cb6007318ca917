use chrono::{DateTime, Utc};

use crate::course_roles::domain::model::entities::course_access_role::CourseAccessRole;

/// Carries the field values the record had before it was removed.
#[derive(Clone, Debug)]
pub struct CourseAccessRoleDeletedEvent {
    pub role: CourseAccessRole,
    pub occurred_at: DateTime<Utc>,
}

impl CourseAccessRoleDeletedEvent {
    pub fn new(role: CourseAccessRole, occurred_at: DateTime<Utc>) -> Self {
        Self { role, occurred_at }
    }
}
