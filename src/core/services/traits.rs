use crate::api::models::{ApiResponse, PaginatedResponse};
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for services that can list resources page by page
#[async_trait]
pub trait ListService<T> {
    async fn list(&self, page: u32, limit: u32) -> Result<PaginatedResponse<T>, ApiError>;
}

/// Trait for services that can retrieve individual resources
#[async_trait]
pub trait GetService<T> {
    async fn get(&self, id: &str) -> Result<ApiResponse<T>, ApiError>;
}

/// Trait for services that can create resources
#[async_trait]
pub trait CreateService<T, CreateInput: Sync> {
    async fn create(&self, input: &CreateInput) -> Result<ApiResponse<T>, ApiError>;
}

/// Trait for services that can update resources
#[async_trait]
pub trait UpdateService<T, UpdateInput: Sync> {
    async fn update(&self, id: &str, input: &UpdateInput) -> Result<ApiResponse<T>, ApiError>;
}

/// Trait for services that can delete resources
#[async_trait]
pub trait DeleteService {
    async fn delete(&self, id: &str) -> Result<ApiResponse<Value>, ApiError>;
}

/// Combined CRUD trait for full resource management
#[async_trait]
pub trait CrudService<T, CreateInput: Sync, UpdateInput: Sync>:
    ListService<T>
    + GetService<T>
    + CreateService<T, CreateInput>
    + UpdateService<T, UpdateInput>
    + DeleteService
{
}
