use crate::course_roles::domain::model::enums::course_roles_domain_error::CourseRolesDomainError;

/// Organization tag of a role assignment. Empty for platform-wide assignments.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct OrgName(String);

impl OrgName {
    pub fn new(value: String) -> Result<Self, CourseRolesDomainError> {
        let trimmed = value.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(CourseRolesDomainError::InvalidOrgName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
