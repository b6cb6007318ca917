use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::course_roles::{
    domain::model::{
        entities::course_access_role::CourseAccessRole,
        enums::course_roles_domain_error::CourseRolesDomainError,
        value_objects::{
            course_access_role_id::CourseAccessRoleId, course_key::CourseKey,
            course_role_name::CourseRoleName, org_name::OrgName, user_id::UserId,
        },
    },
    infrastructure::persistence::repositories::course_access_role_repository::{
        CourseAccessRoleFilter, CourseAccessRoleRepository, CourseScope,
        NewCourseAccessRoleRecord,
    },
};

pub struct SqlxCourseAccessRoleRepositoryImpl {
    pool: PgPool,
}

impl SqlxCourseAccessRoleRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(
        row: sqlx::postgres::PgRow,
    ) -> Result<CourseAccessRole, CourseRolesDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let user_id: i64 = row.try_get("user_id").map_err(map_infra_error)?;
        let course_id_raw: Option<String> = row.try_get("course_id").map_err(map_infra_error)?;
        let org_raw: String = row.try_get("org").map_err(map_infra_error)?;
        let role_raw: String = row.try_get("role").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        Ok(CourseAccessRole::restore(
            CourseAccessRoleId::from_uuid(id),
            UserId::new(user_id)?,
            course_id_raw.map(CourseKey::from_stored),
            OrgName::new(org_raw)?,
            CourseRoleName::new(role_raw)?,
            created_at,
        ))
    }

    async fn insert(&self, role: &CourseAccessRole) -> Result<(), CourseRolesDomainError> {
        let statement = r#"
            INSERT INTO course_access_roles (id, user_id, course_id, org, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(statement)
            .bind(role.id().value())
            .bind(role.user_id().value())
            .bind(role.course_id().map(|c| c.value()))
            .bind(role.org().value())
            .bind(role.role().value())
            .bind(role.created_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &CourseAccessRoleFilter) {
        builder
            .push(" WHERE user_id = ")
            .push_bind(filter.user_id().value());

        match filter.course_scope() {
            CourseScope::Any => {}
            CourseScope::OrgLevel => {
                builder.push(" AND course_id IS NULL");
            }
            CourseScope::Course(course_id) => {
                builder
                    .push(" AND course_id = ")
                    .push_bind(course_id.value().to_string());
            }
        }

        if let Some(org) = filter.org() {
            builder.push(" AND org = ").push_bind(org.value().to_string());
        }

        if let Some(roles) = filter.roles() {
            let role_names = roles
                .iter()
                .map(|role| role.value().to_string())
                .collect::<Vec<_>>();
            builder
                .push(" AND role = ANY(")
                .push_bind(role_names)
                .push(")");
        }
    }
}

#[async_trait]
impl CourseAccessRoleRepository for SqlxCourseAccessRoleRepositoryImpl {
    async fn create(
        &self,
        record: NewCourseAccessRoleRecord,
    ) -> Result<CourseAccessRole, CourseRolesDomainError> {
        let role = CourseAccessRole::restore(
            CourseAccessRoleId::generate(),
            record.user_id,
            record.course_id,
            record.org,
            record.role,
            Utc::now(),
        );
        self.insert(&role).await?;

        Ok(role)
    }

    async fn find(
        &self,
        filter: &CourseAccessRoleFilter,
    ) -> Result<Vec<CourseAccessRole>, CourseRolesDomainError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, user_id, course_id, org, role, created_at FROM course_access_roles",
        );
        Self::push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at, id");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn exists(
        &self,
        filter: &CourseAccessRoleFilter,
    ) -> Result<bool, CourseRolesDomainError> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT EXISTS (SELECT 1 FROM course_access_roles");
        Self::push_filter(&mut builder, filter);
        builder.push(")");

        builder
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)
    }

    async fn delete(&self, filter: &CourseAccessRoleFilter) -> Result<u64, CourseRolesDomainError> {
        let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM course_access_roles");
        Self::push_filter(&mut builder, filter);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: CourseAccessRoleId) -> Result<bool, CourseRolesDomainError> {
        let statement = r#"
            DELETE FROM course_access_roles
            WHERE id = $1
        "#;

        let result = sqlx::query(statement)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn reinstate(&self, role: &CourseAccessRole) -> Result<(), CourseRolesDomainError> {
        self.insert(role).await
    }
}

fn map_infra_error(error: sqlx::Error) -> CourseRolesDomainError {
    if let sqlx::Error::Database(database_error) = &error {
        if database_error.is_unique_violation() {
            return CourseRolesDomainError::RoleAssignmentConflict;
        }
    }
    CourseRolesDomainError::InfrastructureError(error.to_string())
}
