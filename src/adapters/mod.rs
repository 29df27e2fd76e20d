pub mod content_filesystem;
pub mod content_http;
pub mod content_source;
pub mod gemini_client_http;

pub use content_filesystem::FilesystemContentProvider;
pub use content_http::HttpContentProvider;
pub use content_source::ContentSource;
pub use gemini_client_http::HttpGenerationClient;
