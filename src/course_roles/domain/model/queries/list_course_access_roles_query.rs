use crate::course_roles::domain::model::{
    enums::course_roles_domain_error::CourseRolesDomainError,
    value_objects::{course_key::CourseKey, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct ListCourseAccessRolesQuery {
    user_id: UserId,
    course_id: Option<CourseKey>,
}

impl ListCourseAccessRolesQuery {
    pub fn new(user_id: i64, course_id: Option<String>) -> Result<Self, CourseRolesDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            course_id: course_id.map(CourseKey::new).transpose()?,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
    pub fn course_id(&self) -> Option<&CourseKey> {
        self.course_id.as_ref()
    }
}
