pub mod course_access_role_command_service;
pub mod course_access_role_listener;
pub mod course_access_role_query_service;
pub mod course_team_classifier;
pub mod data_researcher_backfill_service;
pub mod data_researcher_sync_observer;
