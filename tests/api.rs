#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use todo_list::api::{router, AppState};
    use todo_list::db::db::Db;
    use todo_list::libs::clock::FixedClock;
    use tower::ServiceExt;

    fn app() -> Router {
        let now = Utc.with_ymd_and_hms(2025, 7, 16, 12, 0, 0).unwrap();
        router(AppState::new(Db::in_memory().unwrap(), Arc::new(FixedClock::new(now))))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn task_body(title: &str, due_date: &str) -> Value {
        json!({
            "title": title,
            "description": "",
            "dueDate": due_date,
            "createdAt": "2025-07-15T08:00:00Z",
            "priority": 1,
            "isCompleted": false
        })
    }

    async fn create_task(app: &Router, title: &str, due_date: &str) -> Value {
        let (status, body) = send(app, Method::POST, "/api/todo-list/task", Some(task_body(title, due_date))).await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn create_then_get_task() {
        let app = app();
        let mut body = task_body("Write report", "2025-07-16T18:00:00Z");
        body["subTasks"] = json!([
            { "title": "Outline", "dueDate": "2025-07-16T10:00:00Z", "createdAt": "2025-07-15T08:00:00Z" }
        ]);

        let (status, created) = send(&app, Method::POST, "/api/todo-list/task", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();
        assert!(id > 0);
        assert_eq!(created["priority"], 1);
        assert_eq!(created["description"], Value::Null);
        assert_eq!(created["subTasks"][0]["taskId"], id);

        let (status, fetched) = send(&app, Method::GET, &format!("/api/todo-list/task?id={}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["title"], "Write report");
        assert_eq!(fetched["subTasks"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_missing_task_is_404() {
        let (status, body) = send(&app(), Method::GET, "/api/todo-list/task?id=404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn invalid_body_lists_field_errors() {
        let body = json!({ "title": "", "priority": 8 });
        let (status, error) = send(&app(), Method::POST, "/api/todo-list/task", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "VALIDATION_ERROR");
        let fields: Vec<&str> = error["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["title", "priority", "dueDate", "createdAt"]);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/todo-list/task")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn range_endpoints_bucket_by_date() {
        let app = app();
        create_task(&app, "Today late", "2025-07-16T23:00:00Z").await;
        create_task(&app, "Tomorrow", "2025-07-17T09:00:00Z").await;
        create_task(&app, "Sunday", "2025-07-20T09:00:00Z").await;
        create_task(&app, "Next Monday", "2025-07-21T09:00:00Z").await;

        let titles = |body: &Value| -> Vec<String> {
            body.as_array()
                .unwrap()
                .iter()
                .map(|t| t["title"].as_str().unwrap().to_string())
                .collect()
        };

        let (_, today) = send(&app, Method::GET, "/api/todo-list/task/all/today", None).await;
        assert_eq!(titles(&today), vec!["Today late"]);

        let (_, tomorrow) = send(&app, Method::GET, "/api/todo-list/task/all/tomorrow", None).await;
        assert_eq!(titles(&tomorrow), vec!["Tomorrow"]);

        let (_, week) = send(&app, Method::GET, "/api/todo-list/task/all/this-week", None).await;
        assert_eq!(titles(&week), vec!["Today late", "Tomorrow", "Sunday"]);
    }

    #[tokio::test]
    async fn completed_filter_is_case_insensitive() {
        let app = app();
        let created = create_task(&app, "Finish me", "2025-07-16T09:00:00Z").await;
        create_task(&app, "Still open", "2025-07-16T09:00:00Z").await;

        let id = created["id"].as_i64().unwrap();
        let mut done = created.clone();
        done["isCompleted"] = json!(true);
        let (status, _) = send(&app, Method::PUT, &format!("/api/todo-list/task/{}", id), Some(done)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/api/todo-list/task/all?isCompleted=TRUE", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], id);

        let (_, all) = send(&app, Method::GET, "/api/todo-list/task/all", None).await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (status, error) = send(&app, Method::GET, "/api/todo-list/task/all?isCompleted=maybe", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["details"][0]["field"], "isCompleted");
    }

    #[tokio::test]
    async fn update_checks_route_id_and_existence() {
        let app = app();
        let created = create_task(&app, "Draft", "2025-07-16T09:00:00Z").await;
        let id = created["id"].as_i64().unwrap();

        let (status, error) = send(&app, Method::PUT, &format!("/api/todo-list/task/{}", id + 1), Some(created.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "ID_MISMATCH");

        let mut ghost = created.clone();
        ghost["id"] = json!(999);
        let (status, _) = send(&app, Method::PUT, "/api/todo-list/task/999", Some(ghost)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let mut changes = created.clone();
        changes["title"] = json!("Final");
        changes["dueDate"] = json!("2030-01-01T00:00:00Z");
        let (status, updated) = send(&app, Method::PUT, &format!("/api/todo-list/task/{}", id), Some(changes)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Final");
        assert_eq!(updated["dueDate"], created["dueDate"]);
        assert!(!updated["updatedAt"].is_null());
    }

    #[tokio::test]
    async fn delete_returns_id_then_404() {
        let app = app();
        let created = create_task(&app, "Disposable", "2025-07-16T09:00:00Z").await;
        let id = created["id"].as_i64().unwrap();
        let uri = format!("/api/todo-list/task?id={}", id);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(id));

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/api/todo-list/task?id=-1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn sub_task_endpoints() {
        let app = app();
        let task = create_task(&app, "Parent", "2025-07-16T09:00:00Z").await;
        let task_id = task["id"].as_i64().unwrap();

        let body = json!({
            "taskId": task_id,
            "title": "Child",
            "dueDate": "2025-07-16T09:00:00Z",
            "createdAt": "2025-07-15T08:00:00Z"
        });
        let (status, created) = send(&app, Method::POST, "/api/todo-list/sub-task", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();

        let (status, list) = send(&app, Method::GET, &format!("/api/todo-list/sub-task?taskId={}", task_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, empty) = send(&app, Method::GET, "/api/todo-list/sub-task?taskId=0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(empty.as_array().unwrap().is_empty());

        let mut changes = created.clone();
        changes["isCompleted"] = json!(true);
        let (status, updated) = send(&app, Method::PUT, &format!("/api/todo-list/sub-task/{}", id), Some(changes)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["isCompleted"], true);

        let (status, deleted) = send(&app, Method::DELETE, &format!("/api/todo-list/sub-task?id={}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, json!(id));
    }

    #[tokio::test]
    async fn sub_task_for_missing_task_is_rejected() {
        let body = json!({
            "taskId": 31337,
            "title": "Orphan",
            "dueDate": "2025-07-16T09:00:00Z",
            "createdAt": "2025-07-15T08:00:00Z"
        });
        let (status, error) = send(&app(), Method::POST, "/api/todo-list/sub-task", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "VALIDATION_ERROR");
        assert_eq!(error["details"][0]["field"], "taskId");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_share_one_connection() {
        let app = app();
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move { create_task(&app, &format!("Task {}", i), "2025-07-16T09:00:00Z").await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let (status, today) = send(&app, Method::GET, "/api/todo-list/task/all/today", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(today.as_array().unwrap().len(), 32);
    }
}
