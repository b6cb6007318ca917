pub mod backfill_data_researcher_roles_request_resource;
pub mod course_access_role_resource;
pub mod course_roles_error_response_resource;
pub mod create_course_access_role_request_resource;
pub mod delete_course_access_role_request_resource;
pub mod list_course_access_roles_query_resource;
