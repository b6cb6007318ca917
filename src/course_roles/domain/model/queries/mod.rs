pub mod list_course_access_roles_query;
