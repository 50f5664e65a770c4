//! Web front end and JSON API

pub mod api;
mod assets;
mod cookies;
mod http;

pub use api::{ApiError, ApiRequest, ApiResponse, ErrorBody, HttpMethod, handle};
pub use assets::{content_type, resolve};
pub use cookies::{SESSION_COOKIE, session_cookie, session_id};
pub use http::{ServerConfig, run};
