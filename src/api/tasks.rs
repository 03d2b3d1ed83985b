//! Task endpoints.

use super::dto::{parse_completed, TaskDto};
use super::error::ApiErrorResponse;
use super::AppState;
use crate::libs::messages::Message;
use crate::libs::range::TaskRange;
use crate::libs::task::Task;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CompletedQuery {
    #[serde(rename = "isCompleted")]
    pub is_completed: Option<String>,
}

pub async fn get_by_id(State(state): State<AppState>, query: Result<Query<IdQuery>, QueryRejection>) -> ApiResult<Task> {
    let Query(IdQuery { id }) = query?;
    match state.tasks(move |svc| svc.get_by_id(id)).await? {
        Some(task) => Ok(Json(task)),
        None => Err(ApiErrorResponse::not_found(Message::TaskNotFound(id).to_string())),
    }
}

pub async fn get_all(
    State(state): State<AppState>,
    query: Result<Query<CompletedQuery>, QueryRejection>,
) -> ApiResult<Vec<Task>> {
    let Query(CompletedQuery { is_completed }) = query?;
    let completed = parse_completed(is_completed.as_deref())?;
    Ok(Json(state.tasks(move |svc| svc.get_all(None, completed)).await?))
}

async fn get_for_range(state: AppState, range: TaskRange) -> ApiResult<Vec<Task>> {
    Ok(Json(state.tasks(move |svc| svc.get_all(Some(range), None)).await?))
}

pub async fn get_for_today(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    get_for_range(state, TaskRange::Today).await
}

pub async fn get_for_tomorrow(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    get_for_range(state, TaskRange::Tomorrow).await
}

pub async fn get_for_this_week(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    get_for_range(state, TaskRange::Week).await
}

pub async fn create(State(state): State<AppState>, body: Result<Json<TaskDto>, JsonRejection>) -> ApiResult<Task> {
    let Json(dto) = body?;
    let task = dto.into_model()?;
    let created = state.tasks(move |svc| svc.add(&task)).await?;
    tracing::info!("{}", Message::TaskCreated(created.id));
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<TaskDto>, JsonRejection>,
) -> ApiResult<Task> {
    let Path(id) = path?;
    let Json(dto) = body?;
    if dto.id != id {
        return Err(ApiErrorResponse::bad_request(
            "ID_MISMATCH",
            Message::RouteIdMismatch(id, dto.id).to_string(),
        ));
    }

    let task = dto.into_model()?;
    let updated = state.tasks(move |svc| svc.update(&task)).await?;
    tracing::info!("{}", Message::TaskUpdated(id));
    Ok(Json(updated))
}

pub async fn delete(State(state): State<AppState>, query: Result<Query<IdQuery>, QueryRejection>) -> ApiResult<i64> {
    let Query(IdQuery { id }) = query?;
    match state.tasks(move |svc| svc.delete(id)).await? {
        Some(id) => {
            tracing::info!("{}", Message::TaskDeleted(id));
            Ok(Json(id))
        }
        None => Err(ApiErrorResponse::not_found(Message::TaskNotFound(id).to_string())),
    }
}
