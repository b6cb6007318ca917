use lazy_static::lazy_static;
use regex::Regex;

use crate::course_roles::domain::model::enums::course_roles_domain_error::CourseRolesDomainError;

lazy_static! {
    static ref COURSE_KEY_REGEX: Regex = Regex::new(r"^\S+$").expect("valid regex");
}

/// Opaque course-like identifier: `course-v1:`, `ccx-v1:`, `library-v1:`, `lib:` or the
/// legacy `Org/Number/Run`. Only emptiness and whitespace are rejected.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CourseKey(String);

impl CourseKey {
    pub fn new(value: String) -> Result<Self, CourseRolesDomainError> {
        let trimmed = value.trim();
        if !COURSE_KEY_REGEX.is_match(trimmed) {
            return Err(CourseRolesDomainError::InvalidCourseKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Rebuilds a key read back from the store without re-validating it.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
