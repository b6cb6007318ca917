pub mod course_access_role_query_service_impl;
