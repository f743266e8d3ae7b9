// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access-control policy.
//!
//! Every route family maps to an [`Action`]; [`decide`] is the single
//! place that knows which caller role may perform which action and at
//! what scope. Handlers never hard-code role checks.
//!
//! Two route families exist in parallel: owner-scoped routes that
//! implicitly filter to the caller's own records, and `/admin/...`
//! routes that bypass ownership but require the Admin role.

/// Caller role, in precedence order Admin > Driver > User > Anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    User,
    Driver,
    Admin,
}

/// One action per route family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListRides,
    ListRidesAdmin,
    GetRide,
    GetRideAdmin,
    CreateRide,
    UpdateRide,
    DeleteRide,
    DeleteRideAdmin,
    ListShifts,
    GetShift,
    DeleteShift,
    ToggleAdmin,
    ToggleDriver,
    ReadSystemInfo,
}

/// How much of the store an allowed action may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only records whose owner field matches the caller. On a create,
    /// the owner field is forced to the caller's id.
    Owner,
    /// Any record regardless of owner.
    Any,
}

/// Policy decision for a (role, action) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Deny,
    Allow(Scope),
}

/// Decide whether `role` may perform `action`, and at what scope.
pub fn decide(role: Role, action: Action) -> Decision {
    use Action::*;
    use Decision::*;
    use Role::*;
    use Scope::*;

    match (role, action) {
        (Anonymous, _) => Deny,

        // Admin-scoped ride routes and full-replace update are admin-only.
        (Admin, ListRidesAdmin | GetRideAdmin | UpdateRide | DeleteRideAdmin) => Allow(Any),
        (_, ListRidesAdmin | GetRideAdmin | UpdateRide | DeleteRideAdmin) => Deny,

        // Owner-scoped ride routes: any authenticated caller, own records
        // only. Admins may create on behalf of any rider and delete any
        // ride even on the owner-scoped route.
        (Admin, CreateRide | DeleteRide) => Allow(Any),
        (_, ListRides | GetRide | CreateRide | DeleteRide) => Allow(Owner),

        // Shifts are visible to every authenticated caller; deletion is
        // limited to the owning driver or an admin.
        (_, ListShifts | GetShift) => Allow(Any),
        (Driver, DeleteShift) => Allow(Owner),
        (Admin, DeleteShift) => Allow(Any),
        (_, DeleteShift) => Deny,

        // Role toggles and system info are admin-only.
        (Admin, ToggleAdmin | ToggleDriver | ReadSystemInfo) => Allow(Any),
        (_, ToggleAdmin | ToggleDriver | ReadSystemInfo) => Deny,
    }
}
