pub mod group;
pub mod person;
pub mod schedule;
pub mod shift;
pub mod user;
