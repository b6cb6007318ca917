use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};

use crate::{
    config::app_config::AppConfig,
    course_roles::{
        application::{
            command_services::{
                course_access_role_command_service_impl::CourseAccessRoleCommandServiceImpl,
                data_researcher_backfill_service_impl::DataResearcherBackfillServiceImpl,
            },
            events::course_access_role_event_dispatcher::CourseAccessRoleEventDispatcher,
            listeners::{
                data_researcher_grant_listener::DataResearcherGrantListener,
                data_researcher_revoke_listener::DataResearcherRevokeListener,
            },
            observers::tracing_data_researcher_sync_observer::TracingDataResearcherSyncObserver,
            query_services::course_access_role_query_service_impl::CourseAccessRoleQueryServiceImpl,
        },
        domain::services::data_researcher_sync_observer::DataResearcherSyncObserver,
        infrastructure::persistence::repositories::{
            course_access_role_repository::CourseAccessRoleRepository,
            postgres::sqlx_course_access_role_repository_impl::SqlxCourseAccessRoleRepositoryImpl,
        },
        interfaces::rest::controllers::course_roles_rest_controller::{
            CourseRolesRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Subscribes the data researcher grant and revoke listeners to `dispatcher`.
/// The grant listener is returned so callers can reuse it for backfills.
pub fn register_data_researcher_sync(
    dispatcher: &mut CourseAccessRoleEventDispatcher,
    repository: Arc<dyn CourseAccessRoleRepository>,
    observer: Arc<dyn DataResearcherSyncObserver>,
) -> Arc<DataResearcherGrantListener> {
    let grant_listener = Arc::new(DataResearcherGrantListener::new(
        repository.clone(),
        observer.clone(),
    ));
    let revoke_listener = Arc::new(DataResearcherRevokeListener::new(repository, observer));

    dispatcher.register(grant_listener.clone());
    dispatcher.register(revoke_listener);

    grant_listener
}

pub async fn build_course_roles_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let repository: Arc<dyn CourseAccessRoleRepository> =
        Arc::new(SqlxCourseAccessRoleRepositoryImpl::new(pool));
    let observer: Arc<dyn DataResearcherSyncObserver> = Arc::new(TracingDataResearcherSyncObserver);

    let mut dispatcher = CourseAccessRoleEventDispatcher::new();
    let grant_listener = if config.course_roles_auto_sync {
        register_data_researcher_sync(&mut dispatcher, repository.clone(), observer)
    } else {
        tracing::warn!("course data researcher auto sync disabled; listeners not registered");
        Arc::new(DataResearcherGrantListener::new(repository.clone(), observer))
    };
    tracing::info!(
        listeners = dispatcher.listener_count(),
        "course access role listeners registered"
    );

    let command_service = Arc::new(CourseAccessRoleCommandServiceImpl::new(
        repository.clone(),
        Arc::new(dispatcher),
    ));
    let query_service = Arc::new(CourseAccessRoleQueryServiceImpl::new(repository.clone()));
    let backfill_service = Arc::new(DataResearcherBackfillServiceImpl::new(
        repository,
        grant_listener,
    ));

    Ok(router(CourseRolesRestControllerState {
        command_service,
        query_service,
        backfill_service,
    }))
}
