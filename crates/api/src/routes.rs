/// Landing page, login and logout
pub mod auth;
/// Group endpoints
pub mod groups;
/// Liveness and version endpoints
pub mod health;
/// Roster and account endpoints
pub mod people;
/// Schedule and shift endpoints
pub mod schedule;
