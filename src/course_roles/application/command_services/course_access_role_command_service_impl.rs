use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::course_roles::{
    application::events::course_access_role_event_dispatcher::CourseAccessRoleEventDispatcher,
    domain::{
        model::{
            commands::{
                create_course_access_role_command::CreateCourseAccessRoleCommand,
                delete_course_access_role_command::DeleteCourseAccessRoleCommand,
            },
            entities::course_access_role::CourseAccessRole,
            enums::course_roles_domain_error::CourseRolesDomainError,
            events::{
                course_access_role_created_event::CourseAccessRoleCreatedEvent,
                course_access_role_deleted_event::CourseAccessRoleDeletedEvent,
            },
        },
        services::course_access_role_command_service::CourseAccessRoleCommandService,
    },
    infrastructure::persistence::repositories::course_access_role_repository::{
        CourseAccessRoleFilter, CourseAccessRoleRepository, CourseScope,
        NewCourseAccessRoleRecord,
    },
};

pub struct CourseAccessRoleCommandServiceImpl {
    repository: Arc<dyn CourseAccessRoleRepository>,
    dispatcher: Arc<CourseAccessRoleEventDispatcher>,
}

impl CourseAccessRoleCommandServiceImpl {
    pub fn new(
        repository: Arc<dyn CourseAccessRoleRepository>,
        dispatcher: Arc<CourseAccessRoleEventDispatcher>,
    ) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Removes a freshly created assignment whose listeners failed.
    async fn undo_create(&self, role: &CourseAccessRole) {
        match self.repository.delete_by_id(role.id()).await {
            Ok(_) => tracing::warn!(
                user_id = role.user_id().value(),
                role = role.role().value(),
                "course access role create rolled back after listener failure"
            ),
            Err(error) => tracing::error!(
                user_id = role.user_id().value(),
                role = role.role().value(),
                error = %error,
                "failed to roll back course access role create"
            ),
        }
    }

    /// Puts back a deleted assignment whose listeners failed.
    async fn undo_delete(&self, role: &CourseAccessRole) {
        match self.repository.reinstate(role).await {
            Ok(()) => tracing::warn!(
                user_id = role.user_id().value(),
                role = role.role().value(),
                "course access role delete rolled back after listener failure"
            ),
            Err(error) => tracing::error!(
                user_id = role.user_id().value(),
                role = role.role().value(),
                error = %error,
                "failed to roll back course access role delete"
            ),
        }
    }
}

#[async_trait]
impl CourseAccessRoleCommandService for CourseAccessRoleCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateCourseAccessRoleCommand,
    ) -> Result<CourseAccessRole, CourseRolesDomainError> {
        let role = self
            .repository
            .create(NewCourseAccessRoleRecord {
                user_id: command.user_id(),
                course_id: command.course_id().cloned(),
                org: command.org().clone(),
                role: command.role().clone(),
            })
            .await?;

        // A listener failure undoes the triggering write.
        if let Err(error) = self
            .dispatcher
            .publish_created(&CourseAccessRoleCreatedEvent::new(role.clone(), Utc::now()))
            .await
        {
            self.undo_create(&role).await;
            return Err(error);
        }

        Ok(role)
    }

    async fn handle_delete(
        &self,
        command: DeleteCourseAccessRoleCommand,
    ) -> Result<u64, CourseRolesDomainError> {
        let course_scope = match command.course_id() {
            Some(course_id) => CourseScope::Course(course_id.clone()),
            None => CourseScope::OrgLevel,
        };
        let mut filter = CourseAccessRoleFilter::for_user(command.user_id())
            .with_course_scope(course_scope)
            .with_roles(vec![command.role().clone()]);
        if let Some(org) = command.org() {
            filter = filter.with_org(org.clone());
        }

        let matching = self.repository.find(&filter).await?;

        let mut deleted = 0;
        for role in matching {
            // A concurrent delete may have won; only announce rows this call removed.
            if !self.repository.delete_by_id(role.id()).await? {
                continue;
            }
            if let Err(error) = self
                .dispatcher
                .publish_deleted(&CourseAccessRoleDeletedEvent::new(role.clone(), Utc::now()))
                .await
            {
                self.undo_delete(&role).await;
                return Err(error);
            }
            deleted += 1;
        }

        Ok(deleted)
    }
}
