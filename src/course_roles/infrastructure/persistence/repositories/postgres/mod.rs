pub mod sqlx_course_access_role_repository_impl;
