//! Subtask endpoints. Same shapes as the task endpoints, keyed by `taskId` for listing.

use super::dto::SubTaskDto;
use super::error::ApiErrorResponse;
use super::tasks::IdQuery;
use super::AppState;
use crate::libs::messages::Message;
use crate::libs::task::SubTask;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    #[serde(rename = "taskId")]
    pub task_id: i64,
}

pub async fn get_by_task_id(
    State(state): State<AppState>,
    query: Result<Query<TaskIdQuery>, QueryRejection>,
) -> ApiResult<Vec<SubTask>> {
    let Query(TaskIdQuery { task_id }) = query?;
    Ok(Json(state.sub_tasks(move |svc| svc.get_all_by_task_id(task_id)).await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SubTaskDto>, JsonRejection>,
) -> ApiResult<SubTask> {
    let Json(dto) = body?;
    let sub_task = dto.into_model()?;
    let created = state
        .sub_tasks(move |svc| svc.add(&sub_task).inspect_err(|e| tracing::warn!("{}", e)))
        .await?;
    tracing::info!("{}", Message::SubTaskCreated(created.id));
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<SubTaskDto>, JsonRejection>,
) -> ApiResult<SubTask> {
    let Path(id) = path?;
    let Json(dto) = body?;
    if dto.id != id {
        return Err(ApiErrorResponse::bad_request(
            "ID_MISMATCH",
            Message::RouteIdMismatch(id, dto.id).to_string(),
        ));
    }

    let sub_task = dto.into_model()?;
    let updated = state.sub_tasks(move |svc| svc.update(&sub_task)).await?;
    tracing::info!("{}", Message::SubTaskUpdated(id));
    Ok(Json(updated))
}

pub async fn delete(State(state): State<AppState>, query: Result<Query<IdQuery>, QueryRejection>) -> ApiResult<i64> {
    let Query(IdQuery { id }) = query?;
    match state.sub_tasks(move |svc| svc.delete(id)).await? {
        Some(id) => {
            tracing::info!("{}", Message::SubTaskDeleted(id));
            Ok(Json(id))
        }
        None => Err(ApiErrorResponse::not_found(Message::SubTaskNotFound(id).to_string())),
    }
}
