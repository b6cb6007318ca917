pub mod course_access_role;
