use chrono::{DateTime, Utc};

use crate::course_roles::domain::model::entities::course_access_role::CourseAccessRole;

/// Raised once per durable insert. Never raised for records read back from storage.
#[derive(Clone, Debug)]
pub struct CourseAccessRoleCreatedEvent {
    pub role: CourseAccessRole,
    pub occurred_at: DateTime<Utc>,
}

impl CourseAccessRoleCreatedEvent {
    pub fn new(role: CourseAccessRole, occurred_at: DateTime<Utc>) -> Self {
        Self { role, occurred_at }
    }
}
