use crate::course_roles::domain::model::enums::course_roles_domain_error::CourseRolesDomainError;

pub const INSTRUCTOR_ROLE: &str = "instructor";
pub const STAFF_ROLE: &str = "staff";
pub const LIMITED_STAFF_ROLE: &str = "limited_staff";
pub const DATA_RESEARCHER_ROLE: &str = "data_researcher";

/// Role tag drawn from the platform's open set of role names.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CourseRoleName(String);

impl CourseRoleName {
    pub fn new(value: String) -> Result<Self, CourseRolesDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(CourseRolesDomainError::InvalidRoleName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn data_researcher() -> Self {
        Self(DATA_RESEARCHER_ROLE.to_string())
    }

    pub(crate) fn known(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
