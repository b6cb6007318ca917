pub mod backfill_data_researcher_roles_command;
pub mod create_course_access_role_command;
pub mod delete_course_access_role_command;
