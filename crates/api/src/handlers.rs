/// Account deletion
pub mod account;
/// Landing page, login and logout
pub mod auth;
/// Group listing and creation
pub mod group;
/// Roster listing and the add-person workflow
pub mod person;
/// Schedule CRUD
pub mod schedule;
/// Shift creation and deletion
pub mod shift;

// Post-action landing pages. The person listing has never carried a trailing
// slash; the other two always have.
pub(crate) const SCHEDULE_LIST: &str = "/schedule/all/";
pub(crate) const PERSON_LIST: &str = "/schedule/person/all";
pub(crate) const GROUP_LIST: &str = "/schedule/group/all/";
