use crate::course_roles::domain::model::{
    enums::course_roles_domain_error::CourseRolesDomainError,
    value_objects::{
        course_key::CourseKey, course_role_name::CourseRoleName, org_name::OrgName,
        user_id::UserId,
    },
};

/// Removes `role` from `user_id` in `course_id` (org-wide when `None`).
/// `org` narrows the match when present.
#[derive(Clone, Debug)]
pub struct DeleteCourseAccessRoleCommand {
    user_id: UserId,
    course_id: Option<CourseKey>,
    org: Option<OrgName>,
    role: CourseRoleName,
}

impl DeleteCourseAccessRoleCommand {
    pub fn new(
        user_id: i64,
        course_id: Option<String>,
        org: Option<String>,
        role: String,
    ) -> Result<Self, CourseRolesDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            course_id: course_id.map(CourseKey::new).transpose()?,
            org: org.map(OrgName::new).transpose()?,
            role: CourseRoleName::new(role)?,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
    pub fn course_id(&self) -> Option<&CourseKey> {
        self.course_id.as_ref()
    }
    pub fn org(&self) -> Option<&OrgName> {
        self.org.as_ref()
    }
    pub fn role(&self) -> &CourseRoleName {
        &self.role
    }
}
