use axum::Router;
use course_roles_ext::{
    config::app_config::AppConfig,
    course_roles::{
        build_course_roles_router,
        interfaces::rest::resources::{
            backfill_data_researcher_roles_request_resource::{
                BackfillDataResearcherRolesRequestResource,
                BackfillDataResearcherRolesResponseResource,
            },
            course_access_role_resource::CourseAccessRoleResource,
            course_roles_error_response_resource::CourseRolesErrorResponseResource,
            create_course_access_role_request_resource::CreateCourseAccessRoleRequestResource,
            delete_course_access_role_request_resource::{
                DeleteCourseAccessRoleRequestResource, DeleteCourseAccessRoleResponseResource,
            },
        },
    },
};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        course_roles_ext::course_roles::interfaces::rest::controllers::course_roles_rest_controller::create_course_access_role,
        course_roles_ext::course_roles::interfaces::rest::controllers::course_roles_rest_controller::delete_course_access_role,
        course_roles_ext::course_roles::interfaces::rest::controllers::course_roles_rest_controller::list_course_access_roles,
        course_roles_ext::course_roles::interfaces::rest::controllers::course_roles_rest_controller::backfill_data_researcher_roles
    ),
    components(
        schemas(
            CreateCourseAccessRoleRequestResource,
            DeleteCourseAccessRoleRequestResource,
            DeleteCourseAccessRoleResponseResource,
            CourseAccessRoleResource,
            BackfillDataResearcherRolesRequestResource,
            BackfillDataResearcherRolesResponseResource,
            CourseRolesErrorResponseResource
        )
    ),
    tags(
        (name = "course-roles", description = "Course access roles with automatic data researcher grants")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let course_roles_router = build_course_roles_router(&config)
        .await
        .expect("failed to build course roles router");

    let app = Router::new()
        .merge(course_roles_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        port = config.port,
        auto_sync = config.course_roles_auto_sync,
        "course roles server listening; swagger ui at /swagger-ui"
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
