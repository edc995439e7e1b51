pub mod blog_service;
pub mod contact_service;
pub mod project_service;
pub mod traits;
pub mod upload_service;
pub mod user_service;

pub use blog_service::BlogService;
pub use contact_service::ContactService;
pub use project_service::ProjectService;
pub use upload_service::UploadService;
pub use user_service::UserService;
