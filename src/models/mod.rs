// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod ride;
pub mod shift;
pub mod system_info;
pub mod user;

pub use ride::{Ride, RideDetails};
pub use shift::Shift;
pub use system_info::SystemInfo;
pub use user::User;

use serde::Serialize;

/// Generic success message returned by delete and toggle operations.
#[derive(Debug, Serialize)]
pub struct GenericMessage {
    pub message: String,
}

impl GenericMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
