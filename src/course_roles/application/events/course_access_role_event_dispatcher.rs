use std::sync::Arc;

use crate::course_roles::domain::{
    model::{
        enums::course_roles_domain_error::CourseRolesDomainError,
        events::{
            course_access_role_created_event::CourseAccessRoleCreatedEvent,
            course_access_role_deleted_event::CourseAccessRoleDeletedEvent,
        },
    },
    services::course_access_role_listener::CourseAccessRoleListener,
};

/// Delivers course access role events to listeners in registration order.
/// Delivery stops at the first listener error, which is returned to the publisher.
#[derive(Default)]
pub struct CourseAccessRoleEventDispatcher {
    listeners: Vec<Arc<dyn CourseAccessRoleListener>>,
}

impl CourseAccessRoleEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Arc<dyn CourseAccessRoleListener>) {
        self.listeners.push(listener);
    }

    pub fn with_listener(mut self, listener: Arc<dyn CourseAccessRoleListener>) -> Self {
        self.register(listener);
        self
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub async fn publish_created(
        &self,
        event: &CourseAccessRoleCreatedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        for listener in &self.listeners {
            listener.on_created(event).await?;
        }
        Ok(())
    }

    pub async fn publish_deleted(
        &self,
        event: &CourseAccessRoleDeletedEvent,
    ) -> Result<(), CourseRolesDomainError> {
        for listener in &self.listeners {
            listener.on_deleted(event).await?;
        }
        Ok(())
    }
}
