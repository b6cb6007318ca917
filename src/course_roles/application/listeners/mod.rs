pub mod data_researcher_grant_listener;
pub mod data_researcher_revoke_listener;
