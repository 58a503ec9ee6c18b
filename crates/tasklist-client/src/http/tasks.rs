/*
[INPUT]:  Task payloads and identifiers
[OUTPUT]: Typed task records from the remote service
[POS]:    HTTP layer - task CRUD and autogeneration endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use crate::http::{Result, TasklistClient};
use crate::types::{AutogenRequest, CreateTaskRequest, Task, UpdateTaskRequest};
use reqwest::Method;

impl TasklistClient {
    /// List all tasks in server-defined order
    ///
    /// GET /api/tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "/api/tasks")?;
        self.send_json(builder).await
    }

    /// Fetch a single task by id
    ///
    /// GET /api/tasks/{id}
    pub async fn get_task(&self, id: i64) -> Result<Task> {
        let endpoint = format!("/api/tasks/{}", id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Create a task; the server assigns id and defaults completed to false
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, req: &CreateTaskRequest) -> Result<Task> {
        let builder = self.request(Method::POST, "/api/tasks")?.json(req);
        self.send_json(builder).await
    }

    /// Apply a partial update to a task
    ///
    /// PUT /api/tasks/{id}
    pub async fn update_task(&self, id: i64, req: &UpdateTaskRequest) -> Result<Task> {
        let endpoint = format!("/api/tasks/{}", id);
        let builder = self.request(Method::PUT, &endpoint)?.json(req);
        self.send_json(builder).await
    }

    /// Generate tasks server-side from a prompt
    ///
    /// POST /api/tasks/autogen
    pub async fn autogen_tasks(&self, req: &AutogenRequest) -> Result<Vec<Task>> {
        let builder = self.request(Method::POST, "/api/tasks/autogen")?.json(req);
        self.send_json(builder).await
    }
}
