//! Configuration for the frontend application

/// API base URL, read at compile time.
/// - Local development: `http://localhost:3000/api`
/// - Deployments set `POST_EDITOR_API_BASE` in the build environment
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("POST_EDITOR_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

