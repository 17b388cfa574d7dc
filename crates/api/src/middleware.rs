/// Session cookies, actor extraction, and the policy gate
pub mod auth;
/// Domain error to HTTP response mapping
pub mod error_handling;
