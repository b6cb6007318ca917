use crate::course_roles::domain::model::events::data_researcher_role_synced_event::DataResearcherRoleSyncedEvent;

pub trait DataResearcherSyncObserver: Send + Sync {
    fn record(&self, event: &DataResearcherRoleSyncedEvent);
}
