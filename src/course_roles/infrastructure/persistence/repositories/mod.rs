pub mod course_access_role_repository;
pub mod postgres;
