// Request extractors shared by handlers

pub mod auth;
pub mod path;

pub use auth::JwtAuth;
pub use path::ApiPath;
