use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::course_roles::{
    domain::{
        model::{
            commands::{
                backfill_data_researcher_roles_command::BackfillDataResearcherRolesCommand,
                create_course_access_role_command::CreateCourseAccessRoleCommand,
                delete_course_access_role_command::DeleteCourseAccessRoleCommand,
            },
            enums::course_roles_domain_error::CourseRolesDomainError,
            queries::list_course_access_roles_query::ListCourseAccessRolesQuery,
        },
        services::{
            course_access_role_command_service::CourseAccessRoleCommandService,
            course_access_role_query_service::CourseAccessRoleQueryService,
            data_researcher_backfill_service::DataResearcherBackfillService,
        },
    },
    interfaces::rest::resources::{
        backfill_data_researcher_roles_request_resource::{
            BackfillDataResearcherRolesRequestResource, BackfillDataResearcherRolesResponseResource,
        },
        course_access_role_resource::CourseAccessRoleResource,
        course_roles_error_response_resource::CourseRolesErrorResponseResource,
        create_course_access_role_request_resource::CreateCourseAccessRoleRequestResource,
        delete_course_access_role_request_resource::{
            DeleteCourseAccessRoleRequestResource, DeleteCourseAccessRoleResponseResource,
        },
        list_course_access_roles_query_resource::ListCourseAccessRolesQueryResource,
    },
};

type ErrorResponse = (StatusCode, Json<CourseRolesErrorResponseResource>);

#[derive(Clone)]
pub struct CourseRolesRestControllerState {
    pub command_service: Arc<dyn CourseAccessRoleCommandService>,
    pub query_service: Arc<dyn CourseAccessRoleQueryService>,
    pub backfill_service: Arc<dyn DataResearcherBackfillService>,
}

pub fn router(state: CourseRolesRestControllerState) -> Router {
    Router::new()
        .route(
            "/course-roles/assignments",
            post(create_course_access_role).get(list_course_access_roles),
        )
        .route(
            "/course-roles/assignments/delete",
            post(delete_course_access_role),
        )
        .route(
            "/course-roles/data-researcher/backfill",
            post(backfill_data_researcher_roles),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/course-roles/assignments",
    tag = "course-roles",
    request_body = CreateCourseAccessRoleRequestResource,
    responses(
        (status = 201, description = "Course access role assigned", body = CourseAccessRoleResource),
        (status = 400, description = "Invalid request", body = CourseRolesErrorResponseResource),
        (status = 409, description = "Role already assigned", body = CourseRolesErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = CourseRolesErrorResponseResource)
    )
)]
pub async fn create_course_access_role(
    State(state): State<CourseRolesRestControllerState>,
    Json(request): Json<CreateCourseAccessRoleRequestResource>,
) -> Result<(StatusCode, Json<CourseAccessRoleResource>), ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = CreateCourseAccessRoleCommand::new(
        request.user_id,
        request.course_id,
        request.org,
        request.role,
    )
    .map_err(map_domain_error)?;

    let role = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(role.into())))
}

#[utoipa::path(
    post,
    path = "/course-roles/assignments/delete",
    tag = "course-roles",
    request_body = DeleteCourseAccessRoleRequestResource,
    responses(
        (status = 200, description = "Matching assignments removed", body = DeleteCourseAccessRoleResponseResource),
        (status = 400, description = "Invalid request", body = CourseRolesErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = CourseRolesErrorResponseResource)
    )
)]
pub async fn delete_course_access_role(
    State(state): State<CourseRolesRestControllerState>,
    Json(request): Json<DeleteCourseAccessRoleRequestResource>,
) -> Result<Json<DeleteCourseAccessRoleResponseResource>, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = DeleteCourseAccessRoleCommand::new(
        request.user_id,
        request.course_id,
        request.org,
        request.role,
    )
    .map_err(map_domain_error)?;

    let deleted = state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(DeleteCourseAccessRoleResponseResource { deleted }))
}

#[utoipa::path(
    get,
    path = "/course-roles/assignments",
    tag = "course-roles",
    params(
        ("user_id" = i64, Query, description = "User whose assignments are listed"),
        ("course_id" = Option<String>, Query, description = "Restrict to one course")
    ),
    responses(
        (status = 200, description = "Course access roles", body = [CourseAccessRoleResource]),
        (status = 400, description = "Invalid request", body = CourseRolesErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = CourseRolesErrorResponseResource)
    )
)]
pub async fn list_course_access_roles(
    State(state): State<CourseRolesRestControllerState>,
    Query(query): Query<ListCourseAccessRolesQueryResource>,
) -> Result<Json<Vec<CourseAccessRoleResource>>, ErrorResponse> {
    let query = ListCourseAccessRolesQuery::new(query.user_id, query.course_id)
        .map_err(map_domain_error)?;

    let roles = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(roles.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/course-roles/data-researcher/backfill",
    tag = "course-roles",
    request_body = BackfillDataResearcherRolesRequestResource,
    responses(
        (status = 200, description = "Missing data researcher roles granted", body = BackfillDataResearcherRolesResponseResource),
        (status = 400, description = "Invalid request", body = CourseRolesErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = CourseRolesErrorResponseResource)
    )
)]
pub async fn backfill_data_researcher_roles(
    State(state): State<CourseRolesRestControllerState>,
    Json(request): Json<BackfillDataResearcherRolesRequestResource>,
) -> Result<Json<BackfillDataResearcherRolesResponseResource>, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command =
        BackfillDataResearcherRolesCommand::new(request.user_id).map_err(map_domain_error)?;

    let granted = state
        .backfill_service
        .handle_backfill(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BackfillDataResearcherRolesResponseResource { granted }))
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(CourseRolesErrorResponseResource { message }),
    )
}

fn map_domain_error(error: CourseRolesDomainError) -> ErrorResponse {
    let status = match error {
        CourseRolesDomainError::InvalidUserId
        | CourseRolesDomainError::InvalidCourseKey
        | CourseRolesDomainError::InvalidOrgName
        | CourseRolesDomainError::InvalidRoleName => StatusCode::BAD_REQUEST,
        CourseRolesDomainError::RoleAssignmentConflict => StatusCode::CONFLICT,
        CourseRolesDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(CourseRolesErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
