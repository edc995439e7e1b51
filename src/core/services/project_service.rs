use super::traits::{CreateService, CrudService, DeleteService, GetService, ListService, UpdateService};
use crate::api::client::ApiClient;
use crate::api::models::{ApiResponse, PaginatedResponse, Project, ProjectInput};
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Portfolio project CRUD.
#[derive(Debug, Clone)]
pub struct ProjectService {
    client: ApiClient,
}

impl ProjectService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListService<Project> for ProjectService {
    async fn list(&self, page: u32, limit: u32) -> Result<PaginatedResponse<Project>, ApiError> {
        self.client
            .get(&format!("/projects?page={}&limit={}", page, limit), None)
            .await
    }
}

#[async_trait]
impl GetService<Project> for ProjectService {
    async fn get(&self, id: &str) -> Result<ApiResponse<Project>, ApiError> {
        self.client.get(&format!("/projects/{}", id), None).await
    }
}

#[async_trait]
impl CreateService<Project, ProjectInput> for ProjectService {
    async fn create(&self, input: &ProjectInput) -> Result<ApiResponse<Project>, ApiError> {
        self.client.post("/projects", Some(input), None).await
    }
}

#[async_trait]
impl UpdateService<Project, ProjectInput> for ProjectService {
    async fn update(&self, id: &str, input: &ProjectInput) -> Result<ApiResponse<Project>, ApiError> {
        self.client
            .put(&format!("/projects/{}", id), Some(input), None)
            .await
    }
}

#[async_trait]
impl DeleteService for ProjectService {
    async fn delete(&self, id: &str) -> Result<ApiResponse<Value>, ApiError> {
        self.client.delete(&format!("/projects/{}", id), None).await
    }
}

impl CrudService<Project, ProjectInput, ProjectInput> for ProjectService {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::Config;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let mut config = Config::default();
        config.base_url = server.uri();
        config.api.retry_attempts = 0;
        config.api.retry_delay_ms = 10;
        ApiClient::new(&config).expect("client creation failed")
    }

    fn project_json(id: &str) -> Value {
        json!({
            "id": id,
            "title": format!("Project {}", id),
            "description": "demo",
            "tags": ["rust"],
            "url": null,
            "featured": false,
            "created_at": "2024-03-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_passes_page_and_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [project_json("11")],
                "success": true,
                "pagination": {
                    "current_page": 2, "per_page": 10, "total": 11,
                    "total_pages": 2, "has_next": false, "has_prev": true
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = ProjectService::new(client_for(&server));
        let envelope = service.list(2, 10).await.unwrap();

        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.pagination.current_page, 2);
        assert!(!envelope.pagination.has_next);
    }

    #[tokio::test]
    async fn test_delete_targets_resource_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/projects/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "success": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = ProjectService::new(client_for(&server));
        let envelope = service.delete("7").await.unwrap();
        assert!(envelope.success);
    }
}
