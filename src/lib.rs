pub mod config;
pub mod course_roles;
