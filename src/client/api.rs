/**
 * Task API Client
 *
 * This module provides the async REST client for the task API. It
 * covers the four CRUD operations; real-time updates arrive separately
 * through the session manager.
 *
 * Callers do not apply mutation responses to their local view. The view
 * changes only when the server's broadcast event round-trips back, so
 * every session (including the originator) converges on the same state.
 */
use reqwest::Client;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::task::{DeleteConfirmation, NewTask, Task, TaskPatch};

/// Errors from the task API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad body)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The server's error message
        message: String,
    },
}

/// Shape of the server's JSON error body
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// REST client for the task API
#[derive(Clone)]
pub struct TaskApiClient {
    client: Client,
    base_url: String,
}

impl TaskApiClient {
    /// Create a client for a server base URL (e.g. `http://localhost:8081`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// The server base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: Uuid) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }

    /// URL of the broadcast subscription endpoint
    pub fn events_url(&self) -> String {
        format!("{}/api/events", self.base_url)
    }

    /// Fetch the full task list, newest first
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(self.tasks_url()).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Create a task; returns the stored record
    pub async fn create_task(&self, new_task: &NewTask) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(new_task)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Patch a task; returns the full updated record
    pub async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> Result<Task, ClientError> {
        let response = self
            .client
            .patch(self.task_url(id))
            .json(patch)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a task
    pub async fn delete_task(&self, id: Uuid) -> Result<DeleteConfirmation, ClientError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into `ClientError::Api`
///
/// The server sends `{"message", "status"}` bodies; if the body is not
/// parseable the raw text is used instead.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text),
        Err(_) => status.to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
