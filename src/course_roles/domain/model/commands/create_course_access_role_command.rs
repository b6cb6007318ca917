use crate::course_roles::domain::model::{
    enums::course_roles_domain_error::CourseRolesDomainError,
    value_objects::{
        course_key::CourseKey, course_role_name::CourseRoleName, org_name::OrgName,
        user_id::UserId,
    },
};

#[derive(Clone, Debug)]
pub struct CreateCourseAccessRoleCommand {
    user_id: UserId,
    course_id: Option<CourseKey>,
    org: OrgName,
    role: CourseRoleName,
}

impl CreateCourseAccessRoleCommand {
    pub fn new(
        user_id: i64,
        course_id: Option<String>,
        org: String,
        role: String,
    ) -> Result<Self, CourseRolesDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            course_id: course_id.map(CourseKey::new).transpose()?,
            org: OrgName::new(org)?,
            role: CourseRoleName::new(role)?,
        })
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
}
