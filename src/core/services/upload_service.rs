use crate::api::client::{ApiClient, UploadPayload};
use crate::api::models::{ApiResponse, UploadedFile};
use crate::error::ApiError;

/// Multipart file uploads.
#[derive(Debug, Clone)]
pub struct UploadService {
    client: ApiClient,
}

impl UploadService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn upload(&self, payload: &UploadPayload) -> Result<ApiResponse<UploadedFile>, ApiError> {
        self.client.upload("/files", payload, None).await
    }
}
