// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ride-Board: ride-scheduling backend for a campus transportation
//! assistance service.
//!
//! Students with mobility needs request rides between campus locations,
//! drivers fulfill shifts, and admins manage rides, shifts and user roles.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod routes;

use config::Config;
use db::Store;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Store,
}
