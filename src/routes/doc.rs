use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginForm, RegistrationForm},
        courses::CourseList,
    },
    flash::{MessageKind, StatusMessage},
    middleware::session::SESSION_COOKIE,
    models::{Course, Student},
    response::{ApiResponse, Meta},
    routes::{auth, courses, health, message, pages},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        pages::home,
        pages::login_page,
        pages::register_page,
        pages::dashboard,
        auth::login,
        auth::register,
        auth::logout,
        courses::list_courses,
        message::current_message,
    ),
    components(
        schemas(
            Student,
            Course,
            CourseList,
            LoginForm,
            RegistrationForm,
            MessageKind,
            StatusMessage,
            pages::PageData,
            pages::DashboardData,
            message::CurrentMessage,
            Meta,
            ApiResponse<CourseList>,
            ApiResponse<pages::PageData>,
            ApiResponse<message::CurrentMessage>
        )
    ),
    security(
        ("session_cookie" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Pages", description = "Page payloads with status-message bootstrap"),
        (name = "Auth", description = "Login, registration and logout"),
        (name = "Courses", description = "Course catalog"),
        (name = "Messages", description = "Status message region"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
