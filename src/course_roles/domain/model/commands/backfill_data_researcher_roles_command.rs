use crate::course_roles::domain::model::{
    enums::course_roles_domain_error::CourseRolesDomainError, value_objects::user_id::UserId,
};

#[derive(Clone, Debug)]
pub struct BackfillDataResearcherRolesCommand {
    user_id: UserId,
}

impl BackfillDataResearcherRolesCommand {
    pub fn new(user_id: i64) -> Result<Self, CourseRolesDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
