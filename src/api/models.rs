use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard response envelope.
///
/// `success: false` with a 2xx status is an application-level soft failure:
/// the request engine does not raise for it, the hook layer turns it into
/// error state.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Envelope for list endpoints: `data` is a page of items plus a pagination
/// block.
#[derive(Debug, Deserialize, Clone)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub success: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

// Authentication models
#[derive(Debug, Serialize, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload returned by login/register: the bearer token plus the
/// authenticated user.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

// Portfolio models
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct BlogPostInput {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
}

// Contact models
#[derive(Debug, Serialize, Clone)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// File upload models
#[derive(Debug, Deserialize, Clone)]
pub struct UploadedFile {
    pub id: String,
    pub file_name: String,
    pub url: String,
    pub size: u64,
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_envelope_success() {
        let json = r#"{
            "data": {"id": "7", "name": "Ada", "email": "ada@example.test",
                     "avatar_url": null, "created_at": "2024-01-15T10:00:00Z"},
            "success": true,
            "message": null
        }"#;
        let envelope: ApiResponse<User> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.errors.is_empty());
        let user = envelope.data.unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn test_deserialize_envelope_soft_failure() {
        let json = r#"{
            "data": null,
            "success": false,
            "message": "Profile is private",
            "errors": ["visibility: private"]
        }"#;
        let envelope: ApiResponse<User> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Profile is private"));
        assert_eq!(envelope.errors, vec!["visibility: private".to_string()]);
    }

    #[test]
    fn test_deserialize_paginated_envelope() {
        let json = r#"{
            "data": [
                {"id": "1", "title": "One", "description": "first",
                 "tags": ["rust"], "url": null, "featured": true,
                 "created_at": "2024-01-01T00:00:00Z"},
                {"id": "2", "title": "Two", "description": "second",
                 "url": null, "featured": false,
                 "created_at": "2024-02-01T00:00:00Z"}
            ],
            "success": true,
            "pagination": {
                "current_page": 1, "per_page": 2, "total": 5,
                "total_pages": 3, "has_next": true, "has_prev": false
            }
        }"#;
        let envelope: PaginatedResponse<Project> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 2);
        // Missing tags field defaults to empty
        assert!(envelope.data[1].tags.is_empty());
        assert_eq!(envelope.pagination.current_page, 1);
        assert!(envelope.pagination.has_next);
        assert!(!envelope.pagination.has_prev);
    }

    #[test]
    fn test_serialize_login_request() {
        let req = LoginRequest {
            email: "ada@example.test".to_string(),
            password: "secret".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["email"], "ada@example.test");
        assert_eq!(value["password"], "secret");
    }
}
