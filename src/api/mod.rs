//! HTTP API for tasks and subtasks.
//!
//! All resources live under `/api/todo-list`. Bodies are camelCase JSON and
//! failures use the `{ code, message, details? }` shape from [`error`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use todo_list::api::{router, AppState};
//! use todo_list::db::db::Db;
//! use todo_list::libs::clock::SystemClock;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let state = AppState::new(Db::new()?, Arc::new(SystemClock));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, router(state)).await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod error;
pub mod sub_tasks;
pub mod tasks;

use crate::db::db::Db;
use crate::libs::clock::Clock;
use crate::libs::service::{self, SubTaskService, TaskService};
use axum::routing::{get, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Serialize;
use error::ApiErrorResponse;
use std::sync::Arc;
use tokio::task;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/todo-list";

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Db>>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: Db, clock: Arc<dyn Clock>) -> Self {
        AppState {
            db: Arc::new(Mutex::new(db)),
            clock,
        }
    }

    /// Runs `f` against a task service bound to the shared connection.
    /// SQLite work happens on the blocking pool, never on a runtime worker.
    pub async fn tasks<T, F>(&self, f: F) -> Result<T, ApiErrorResponse>
    where
        T: Send + 'static,
        F: FnOnce(&TaskService) -> service::Result<T> + Send + 'static,
    {
        let (db, clock) = (Arc::clone(&self.db), Arc::clone(&self.clock));
        let result = task::spawn_blocking(move || {
            let db = db.lock();
            f(&TaskService::new(&db.conn, clock.as_ref()))
        })
        .await?;
        Ok(result?)
    }

    pub async fn sub_tasks<T, F>(&self, f: F) -> Result<T, ApiErrorResponse>
    where
        T: Send + 'static,
        F: FnOnce(&SubTaskService) -> service::Result<T> + Send + 'static,
    {
        let (db, clock) = (Arc::clone(&self.db), Arc::clone(&self.clock));
        let result = task::spawn_blocking(move || {
            let db = db.lock();
            f(&SubTaskService::new(&db.conn, clock.as_ref()))
        })
        .await?;
        Ok(result?)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/task", get(tasks::get_by_id).post(tasks::create).delete(tasks::delete))
        .route("/task/{id}", put(tasks::update))
        .route("/task/all", get(tasks::get_all))
        .route("/task/all/today", get(tasks::get_for_today))
        .route("/task/all/tomorrow", get(tasks::get_for_tomorrow))
        .route("/task/all/this-week", get(tasks::get_for_this_week))
        .route(
            "/sub-task",
            get(sub_tasks::get_by_task_id)
                .post(sub_tasks::create)
                .delete(sub_tasks::delete),
        )
        .route("/sub-task/{id}", put(sub_tasks::update));

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
