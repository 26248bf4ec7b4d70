use crate::core::application::{Application, ApplicationServices};
use crate::domain::auth::AuthService;
use crate::domain::workbench::WorkbenchService;
use crate::inbound::http::handlers::{
    auth_login, auth_logout, auth_profile, auth_register, dashboard_stats, projects_create,
    projects_current, projects_delete, projects_get, projects_list, projects_select,
    projects_tasks, projects_update, server_health, tasks_create, tasks_delete, tasks_move,
    tasks_update, users_list,
};
use crate::inbound::http::middleware::auth;
use axum::Router;
use axum::extract::{MatchedPath, Request};
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum_extra::extract::cookie::SameSite;
use http::header::{ACCEPT, ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use http::{HeaderValue, Method};
use time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

pub fn router<
    AUTH: AuthService + Send + Sync + 'static,
    WORKBENCH: WorkbenchService + Send + Sync + 'static,
    Store: SessionStore + Clone + Send + Sync + 'static,
>(
    application: Application<AUTH, WORKBENCH>,
    session_store: Store,
) -> Router {
    let config = application.config();
    let same_site = if config.secure_session {
        SameSite::None
    } else {
        SameSite::Lax
    };
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.secure_session)
        .with_expiry(Expiry::OnInactivity(Duration::hours(1)))
        .with_same_site(same_site);

    let hosts: Vec<HeaderValue> = config
        .cors_hosts
        .clone()
        .into_iter()
        .filter_map(|host| host.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![
            ORIGIN,
            AUTHORIZATION,
            ACCEPT,
            CONTENT_TYPE,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        ])
        .allow_origin(hosts)
        .allow_credentials(true);

    let api_routes = api_routes(application.clone());

    Router::new()
        .route("/healthz", get(server_health))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(session_layer)
        .layer((
            SetSensitiveHeadersLayer::new([AUTHORIZATION]),
            CompressionLayer::new(),
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    let method = req.method();
                    let uri = req.uri();

                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::debug_span!("request", %method, %uri, matched_path)
                })
                .on_failure(()),
            TimeoutLayer::new(std::time::Duration::from_secs(30)),
            CatchPanicLayer::new(),
        ))
        .with_state(application)
}

fn api_routes<APP>(application: APP) -> Router<APP>
where
    APP: ApplicationServices + Send + Sync + 'static,
{
    let protected = Router::new()
        .route("/auth/profile", get(auth_profile::<APP>))
        .route_layer(from_fn_with_state(application, auth::<APP>));

    Router::new()
        .route("/auth/login", post(auth_login::<APP>))
        .route("/auth/logout", post(auth_logout::<APP>))
        .route("/auth/register", post(auth_register::<APP>))
        .route(
            "/projects",
            get(projects_list::<APP>).post(projects_create::<APP>),
        )
        .route(
            "/projects/current",
            get(projects_current::<APP>).put(projects_select::<APP>),
        )
        .route(
            "/projects/{project_id}",
            get(projects_get::<APP>)
                .put(projects_update::<APP>)
                .delete(projects_delete::<APP>),
        )
        .route("/projects/{project_id}/tasks", get(projects_tasks::<APP>))
        .route("/tasks", post(tasks_create::<APP>))
        .route(
            "/tasks/{task_id}",
            put(tasks_update::<APP>).delete(tasks_delete::<APP>),
        )
        .route("/tasks/{task_id}/status", put(tasks_move::<APP>))
        .route("/stats", get(dashboard_stats::<APP>))
        .route("/users", get(users_list::<APP>))
        .merge(protected)
}
