use axum::{
    Router,
    routing::{get, post, put},
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use config::Config;
use database::{ImageOperation, LessonOperation, ProgressOperation, UserOperation};
use generator::ContentService;
use middleware::{auth_middleware, log_errors};
use session::SessionStore;

pub mod config;
pub mod database;
pub mod error;
pub mod generator;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub content: ContentService,
    pub lessons: LessonOperation,
    pub progress: ProgressOperation,
    pub images: ImageOperation,
    pub users: UserOperation,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Result<Self, reqwest::Error> {
        let content = ContentService::from_config(&config)?;

        Ok(AppState {
            lessons: LessonOperation::new(pool.clone()),
            progress: ProgressOperation::new(pool.clone()),
            images: ImageOperation::new(pool.clone()),
            users: UserOperation::new(pool).with_hash_cost(config.bcrypt_cost),
            sessions: SessionStore::new(),
            content,
            config,
        })
    }
}

/// 组装全部路由：公开路由 + 需要登录的路由，挂在 api_base_uri 下
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/users/register", post(routes::user::register))
        .route("/users/login", post(routes::user::login));

    let protected_routes = Router::new()
        .route("/users/logout", post(routes::user::logout))
        // 会话
        .route("/session", get(routes::session::get_session))
        .route("/session/api-keys", put(routes::session::set_api_keys))
        // 课程
        .route(
            "/lessons",
            get(routes::lesson::list_lessons).post(routes::lesson::save_lesson),
        )
        .route("/lessons/outline", post(routes::lesson::generate_outline))
        .route("/lessons/current", get(routes::lesson::current_lesson))
        .route(
            "/lessons/current/save",
            post(routes::lesson::save_current_lesson),
        )
        .route("/lessons/{lesson_id}", get(routes::lesson::find_lesson))
        .route(
            "/lessons/{lesson_id}/images",
            get(routes::lesson::list_lesson_images),
        )
        // 测验
        .route("/quizzes", post(routes::quiz::generate_quiz))
        .route("/quizzes/current", get(routes::quiz::current_quiz))
        // 插图
        .route(
            "/illustrations",
            post(routes::illustration::generate_illustration),
        )
        // 学习进度
        .route(
            "/progress",
            get(routes::progress::list_progress).post(routes::progress::save_progress),
        )
        .route("/progress/summary", get(routes::progress::progress_summary))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api = Router::new().merge(public_routes).merge(protected_routes);

    let base = state.config.api_base_uri.trim_end_matches('/');
    let router = if base.is_empty() {
        api
    } else {
        Router::new().nest(base, api)
    };

    let router = router
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http());

    // 开发模式下允许跨域，方便前端单独启动
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}
