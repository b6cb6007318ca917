pub mod course_access_role_id;
pub mod course_key;
pub mod course_role_name;
pub mod org_name;
pub mod user_id;
