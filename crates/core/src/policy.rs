//! Role-based access decisions.
//!
//! The policy is a pure function of (role, action) with no reference to
//! request or persistence state, so it can be tested exhaustively in
//! isolation. Any pair without an explicit allow rule is denied.

use serde::{Deserialize, Serialize};

/// Permission codename granting read access to schedules.
pub const VIEW_SCHEDULE: &str = "view_schedule";

/// Effective role of the actor issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Anonymous,
    /// Authenticated account with no extra grants.
    Authenticated,
    /// Authenticated account holding the `view_schedule` permission.
    Permissioned,
    Superuser,
}

/// Entity-scoped operations subject to the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScheduleList,
    ScheduleDetail,
    ScheduleAdd,
    ScheduleEdit,
    ScheduleCheckout,
    ScheduleDelete,
    ShiftAdd,
    ShiftDelete,
    PersonList,
    PersonAdd,
    GroupList,
    GroupAdd,
    UserDelete,
}

impl Action {
    pub const ALL: [Action; 13] = [
        Action::ScheduleList,
        Action::ScheduleDetail,
        Action::ScheduleAdd,
        Action::ScheduleEdit,
        Action::ScheduleCheckout,
        Action::ScheduleDelete,
        Action::ShiftAdd,
        Action::ShiftDelete,
        Action::PersonList,
        Action::PersonAdd,
        Action::GroupList,
        Action::GroupAdd,
        Action::UserDelete,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Resolves an access decision for `role` performing `action`.
///
/// Superusers may do everything. Holders of `view_schedule` may list and view
/// schedules. The catch-all arm denies every other combination, including all
/// anonymous access.
pub fn authorize(role: Role, action: Action) -> Decision {
    match (role, action) {
        (Role::Superuser, _) => Decision::Allow,
        (Role::Permissioned, Action::ScheduleList | Action::ScheduleDetail) => Decision::Allow,
        _ => Decision::Deny,
    }
}
