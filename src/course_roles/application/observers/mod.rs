pub mod tracing_data_researcher_sync_observer;
