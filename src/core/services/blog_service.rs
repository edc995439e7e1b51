use super::traits::{CreateService, CrudService, DeleteService, GetService, ListService, UpdateService};
use crate::api::client::ApiClient;
use crate::api::models::{ApiResponse, BlogPost, BlogPostInput, PaginatedResponse};
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Blog post CRUD. Posts are addressed by slug for reads and by id for
/// writes.
#[derive(Debug, Clone)]
pub struct BlogService {
    client: ApiClient,
}

impl BlogService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListService<BlogPost> for BlogService {
    async fn list(&self, page: u32, limit: u32) -> Result<PaginatedResponse<BlogPost>, ApiError> {
        self.client
            .get(&format!("/posts?page={}&limit={}", page, limit), None)
            .await
    }
}

#[async_trait]
impl GetService<BlogPost> for BlogService {
    async fn get(&self, slug: &str) -> Result<ApiResponse<BlogPost>, ApiError> {
        self.client.get(&format!("/posts/{}", slug), None).await
    }
}

#[async_trait]
impl CreateService<BlogPost, BlogPostInput> for BlogService {
    async fn create(&self, input: &BlogPostInput) -> Result<ApiResponse<BlogPost>, ApiError> {
        self.client.post("/posts", Some(input), None).await
    }
}

#[async_trait]
impl UpdateService<BlogPost, BlogPostInput> for BlogService {
    async fn update(
        &self,
        id: &str,
        input: &BlogPostInput,
    ) -> Result<ApiResponse<BlogPost>, ApiError> {
        self.client
            .put(&format!("/posts/{}", id), Some(input), None)
            .await
    }
}

#[async_trait]
impl DeleteService for BlogService {
    async fn delete(&self, id: &str) -> Result<ApiResponse<Value>, ApiError> {
        self.client.delete(&format!("/posts/{}", id), None).await
    }
}

impl CrudService<BlogPost, BlogPostInput, BlogPostInput> for BlogService {}
