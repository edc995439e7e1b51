use crate::api::client::ApiClient;
use crate::api::models::{
    ApiResponse, AuthPayload, LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};
use crate::error::ApiError;
use serde_json::Value;

/// User and session operations.
#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, input: &LoginRequest) -> Result<ApiResponse<AuthPayload>, ApiError> {
        self.client.post("/auth/login", Some(input), None).await
    }

    pub async fn register(
        &self,
        input: &RegisterRequest,
    ) -> Result<ApiResponse<AuthPayload>, ApiError> {
        self.client.post("/auth/register", Some(input), None).await
    }

    pub async fn logout(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.client
            .post::<Value, ApiResponse<Value>>("/auth/logout", None, None)
            .await
    }

    pub async fn current_user(&self) -> Result<ApiResponse<User>, ApiError> {
        self.client.get("/auth/me", None).await
    }

    pub async fn update_profile(
        &self,
        input: &UpdateProfileRequest,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client.put("/users/me", Some(input), None).await
    }
}
