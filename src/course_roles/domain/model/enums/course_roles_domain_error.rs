use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseRolesDomainError {
    #[error("user id is invalid; it must be a positive integer")]
    InvalidUserId,

    #[error("course key is invalid")]
    InvalidCourseKey,

    #[error("organization name is invalid")]
    InvalidOrgName,

    #[error("role name is invalid")]
    InvalidRoleName,

    #[error("course access role already assigned")]
    RoleAssignmentConflict,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
