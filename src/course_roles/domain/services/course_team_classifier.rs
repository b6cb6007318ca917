use crate::course_roles::domain::model::{
    entities::course_access_role::CourseAccessRole,
    value_objects::course_role_name::{
        CourseRoleName, INSTRUCTOR_ROLE, LIMITED_STAFF_ROLE, STAFF_ROLE,
    },
};

/// Course-team roles that imply the data researcher role in the same course.
pub const COURSE_TEAM_ROLES: [&str; 3] = [INSTRUCTOR_ROLE, STAFF_ROLE, LIMITED_STAFF_ROLE];

/// True for course-scoped instructor, staff and limited staff assignments.
/// Org-level assignments never qualify.
pub fn is_course_team_role(role: &CourseAccessRole) -> bool {
    role.course_id().is_some() && COURSE_TEAM_ROLES.contains(&role.role().value())
}

pub fn course_team_role_names() -> Vec<CourseRoleName> {
    COURSE_TEAM_ROLES
        .into_iter()
        .map(CourseRoleName::known)
        .collect()
}
