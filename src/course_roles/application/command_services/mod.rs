pub mod course_access_role_command_service_impl;
pub mod data_researcher_backfill_service_impl;
