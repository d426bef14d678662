//! Client for the remote task service.
//!
//! The service exposes a single resource:
//!
//! | Method   | Path          | Body                           | Response  |
//! |----------|---------------|--------------------------------|-----------|
//! | `GET`    | `/tasks`      |                                | `{tasks}` |
//! | `GET`    | `/tasks/:id`  |                                | `{task}`  |
//! | `POST`   | `/tasks`      | `{title, description, status}` | `{task}`  |
//! | `PUT`    | `/tasks/:id`  | partial fields                 | `{task}`  |
//! | `DELETE` | `/tasks/:id`  |                                | 2xx       |
//!
//! Failures carry a JSON body with an `error` field. Every non-2xx response
//! becomes [`TaskError::Backend`] with that message, or `HTTP Error: <status>`
//! when the body has none.
//!
//! ```rust,no_run
//! use taskmate::api::tasks::TasksApi;
//!
//! # async fn run() -> taskmate::libs::error::TaskResult<()> {
//! let api = TasksApi::new("http://localhost:5000/api");
//! if api.probe().await {
//!     for task in api.fetch_all().await? {
//!         println!("{} {}", task.id, task.text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{NewTask, Task, TaskPatch, TaskStatus, DEFAULT_CATEGORY};
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const TASKS_PATH: &str = "tasks";

/// Timestamp layout used by the service for `created_at` / `updated_at`.
const SERVER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Task record as the service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTask {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RemoteTask {
    /// Converts the server shape into the internal [`Task`].
    pub fn normalize(self) -> Task {
        let status = self.status.unwrap_or_default();
        Task {
            id: self.id,
            text: self.title,
            description: self.description.unwrap_or_default(),
            category: DEFAULT_CATEGORY.to_string(),
            completed: status.is_completed(),
            status,
            created_at: self.created_at.as_deref().and_then(parse_server_time).unwrap_or_else(Utc::now),
            updated_at: self.updated_at.as_deref().and_then(parse_server_time),
        }
    }
}

/// Accepts the service's `YYYY-MM-DD HH:MM:SS` (UTC) as well as RFC 3339.
pub fn parse_server_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, SERVER_TIME_FORMAT) {
        return Some(naive.and_utc());
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => {
            debug!(value = raw, "unparseable server timestamp");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct TaskListResponse {
    #[serde(default)]
    tasks: Vec<RemoteTask>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    task: RemoteTask,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateTaskRequest<'a> {
    title: &'a str,
    description: &'a str,
    status: TaskStatus,
}

#[derive(Debug, Clone)]
pub struct TasksApi {
    client: Client,
    base_url: String,
}

impl TasksApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single read against the list endpoint. `true` only on a 2xx response.
    pub async fn probe(&self) -> bool {
        match self.client.get(self.collection_url()).send().await {
            Ok(res) if res.status().is_success() => true,
            Ok(res) => {
                warn!(status = %res.status(), "task service answered the probe with an error");
                false
            }
            Err(err) => {
                warn!(error = %err, "task service unreachable");
                false
            }
        }
    }

    pub async fn fetch_all(&self) -> TaskResult<Vec<Task>> {
        let res = self.send(self.request(Method::GET, self.collection_url())).await?;
        let body: TaskListResponse = res.json().await?;
        Ok(body.tasks.into_iter().map(RemoteTask::normalize).collect())
    }

    pub async fn fetch(&self, id: i64) -> TaskResult<Task> {
        let res = self.send(self.request(Method::GET, self.item_url(id))).await?;
        let body: TaskResponse = res.json().await?;
        Ok(body.task.normalize())
    }

    /// Creates a pending task; the returned record carries the server-assigned id.
    pub async fn create(&self, draft: &NewTask) -> TaskResult<Task> {
        let payload = CreateTaskRequest {
            title: &draft.text,
            description: &draft.description,
            status: TaskStatus::Pending,
        };
        let res = self.send(self.request(Method::POST, self.collection_url()).json(&payload)).await?;
        let body: TaskResponse = res.json().await?;
        let mut task = body.task.normalize();
        task.category = draft.category_or_default();
        Ok(task)
    }

    pub async fn update(&self, id: i64, patch: &TaskPatch) -> TaskResult<Task> {
        let res = self.send(self.request(Method::PUT, self.item_url(id)).json(patch)).await?;
        let body: TaskResponse = res.json().await?;
        Ok(body.task.normalize())
    }

    pub async fn delete(&self, id: i64) -> TaskResult<()> {
        self.send(self.request(Method::DELETE, self.item_url(id))).await?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, TASKS_PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, TASKS_PATH, id)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        debug!(%method, %url, "task service request");
        self.client.request(method, url).header(header::CONTENT_TYPE, "application/json")
    }

    /// Sends the request and turns any non-2xx answer into a backend error.
    async fn send(&self, request: RequestBuilder) -> TaskResult<Response> {
        let res = request.send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let message = res.json::<ErrorResponse>().await.ok().and_then(|body| body.error);
        warn!(%status, error = ?message, "task service request failed");
        Err(match message {
            Some(message) => TaskError::Backend(message),
            None => TaskError::http_status(status.as_u16()),
        })
    }
}
