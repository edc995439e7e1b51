use crate::api::client::ApiClient;
use crate::api::models::{ApiResponse, ContactInput, ContactMessage};
use crate::error::ApiError;

/// Contact form submission.
#[derive(Debug, Clone)]
pub struct ContactService {
    client: ApiClient,
}

impl ContactService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn send(&self, input: &ContactInput) -> Result<ApiResponse<ContactMessage>, ApiError> {
        self.client.post("/contact", Some(input), None).await
    }
}
