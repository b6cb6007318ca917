pub mod course_access_role_created_event;
pub mod course_access_role_deleted_event;
pub mod data_researcher_role_synced_event;
