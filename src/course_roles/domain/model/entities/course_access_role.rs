use chrono::{DateTime, Utc};

use crate::course_roles::domain::model::value_objects::{
    course_access_role_id::CourseAccessRoleId, course_key::CourseKey,
    course_role_name::CourseRoleName, org_name::OrgName, user_id::UserId,
};

/// A stored grant: `user_id` holds `role` in `course_id`, or org-wide when `course_id` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseAccessRole {
    id: CourseAccessRoleId,
    user_id: UserId,
    course_id: Option<CourseKey>,
    org: OrgName,
    role: CourseRoleName,
    created_at: DateTime<Utc>,
}

impl CourseAccessRole {
    pub fn restore(
        id: CourseAccessRoleId,
        user_id: UserId,
        course_id: Option<CourseKey>,
        org: OrgName,
        role: CourseRoleName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            course_id,
            org,
            role,
            created_at,
        }
    }

    pub fn id(&self) -> CourseAccessRoleId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn course_id(&self) -> Option<&CourseKey> {
        self.course_id.as_ref()
    }

    pub fn org(&self) -> &OrgName {
        &self.org
    }

    pub fn role(&self) -> &CourseRoleName {
        &self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
