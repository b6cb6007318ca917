use async_trait::async_trait;

use crate::course_roles::domain::model::{
    entities::course_access_role::CourseAccessRole,
    enums::course_roles_domain_error::CourseRolesDomainError,
    value_objects::{
        course_access_role_id::CourseAccessRoleId, course_key::CourseKey,
        course_role_name::CourseRoleName, org_name::OrgName, user_id::UserId,
    },
};

#[derive(Clone, Debug)]
pub struct NewCourseAccessRoleRecord {
    pub user_id: UserId,
    pub course_id: Option<CourseKey>,
    pub org: OrgName,
    pub role: CourseRoleName,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CourseScope {
    Any,
    OrgLevel,
    Course(CourseKey),
}

/// Selects the role assignments of one user. Unset criteria match everything.
#[derive(Clone, Debug)]
pub struct CourseAccessRoleFilter {
    user_id: UserId,
    course_scope: CourseScope,
    org: Option<OrgName>,
    roles: Option<Vec<CourseRoleName>>,
}

impl CourseAccessRoleFilter {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            course_scope: CourseScope::Any,
            org: None,
            roles: None,
        }
    }

    pub fn in_course(self, course_id: CourseKey) -> Self {
        self.with_course_scope(CourseScope::Course(course_id))
    }

    pub fn with_course_scope(mut self, course_scope: CourseScope) -> Self {
        self.course_scope = course_scope;
        self
    }

    pub fn with_org(mut self, org: OrgName) -> Self {
        self.org = Some(org);
        self
    }

    pub fn with_roles(mut self, roles: Vec<CourseRoleName>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn course_scope(&self) -> &CourseScope {
        &self.course_scope
    }

    pub fn org(&self) -> Option<&OrgName> {
        self.org.as_ref()
    }

    pub fn roles(&self) -> Option<&[CourseRoleName]> {
        self.roles.as_deref()
    }

    pub fn matches(&self, role: &CourseAccessRole) -> bool {
        if role.user_id() != self.user_id {
            return false;
        }

        let scope_match = match &self.course_scope {
            CourseScope::Any => true,
            CourseScope::OrgLevel => role.course_id().is_none(),
            CourseScope::Course(course_id) => role.course_id() == Some(course_id),
        };
        if !scope_match {
            return false;
        }

        if let Some(org) = &self.org {
            if role.org() != org {
                return false;
            }
        }

        match &self.roles {
            None => true,
            Some(roles) => roles.iter().any(|r| r == role.role()),
        }
    }
}

#[async_trait]
pub trait CourseAccessRoleRepository: Send + Sync {
    /// Fails with `RoleAssignmentConflict` when the store already holds an identical assignment.
    async fn create(
        &self,
        record: NewCourseAccessRoleRecord,
    ) -> Result<CourseAccessRole, CourseRolesDomainError>;

    async fn find(
        &self,
        filter: &CourseAccessRoleFilter,
    ) -> Result<Vec<CourseAccessRole>, CourseRolesDomainError>;

    async fn exists(
        &self,
        filter: &CourseAccessRoleFilter,
    ) -> Result<bool, CourseRolesDomainError>;

    /// Removes every match. Zero matches is not an error.
    async fn delete(&self, filter: &CourseAccessRoleFilter) -> Result<u64, CourseRolesDomainError>;

    async fn delete_by_id(&self, id: CourseAccessRoleId) -> Result<bool, CourseRolesDomainError>;

    /// Writes back a previously removed assignment, keeping its id and creation time.
    async fn reinstate(&self, role: &CourseAccessRole) -> Result<(), CourseRolesDomainError>;
}
