use crate::course_roles::domain::{
    model::events::data_researcher_role_synced_event::DataResearcherRoleSyncedEvent,
    services::data_researcher_sync_observer::DataResearcherSyncObserver,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDataResearcherSyncObserver;

impl DataResearcherSyncObserver for TracingDataResearcherSyncObserver {
    fn record(&self, event: &DataResearcherRoleSyncedEvent) {
        if event.outcome.changed_store() {
            tracing::info!(
                user_id = event.user_id.value(),
                course_id = event.course_id.value(),
                org = event.org.value(),
                trigger_role = event.trigger_role.value(),
                outcome = event.outcome.as_str(),
                removed_count = event.removed_count,
                "course data researcher role synchronized"
            );
        } else {
            tracing::debug!(
                user_id = event.user_id.value(),
                course_id = event.course_id.value(),
                trigger_role = event.trigger_role.value(),
                outcome = event.outcome.as_str(),
                "course data researcher role left unchanged"
            );
        }
    }
}
