use crate::course_roles::domain::model::enums::course_roles_domain_error::CourseRolesDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Result<Self, CourseRolesDomainError> {
        if value <= 0 {
            return Err(CourseRolesDomainError::InvalidUserId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
