pub mod course_roles_domain_error;
pub mod data_researcher_sync_outcome;
