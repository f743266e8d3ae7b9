// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Response;
use ride_board::config::Config;
use ride_board::db::Store;
use ride_board::middleware::auth::create_jwt;
use ride_board::models::{Ride, RideDetails, Shift, User};
use ride_board::routes::create_router;
use ride_board::AppState;
use std::sync::Arc;

pub const ADMIN_ID: i64 = 1;
pub const DRIVER_ID: i64 = 2;
pub const RIDER_ID: i64 = 3;
pub const OTHER_RIDER_ID: i64 = 4;

/// Create a test app over an in-memory store seeded with one user of
/// each role. Returns the router and the shared state.
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store = Store::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store");

    let users = [
        User {
            id: ADMIN_ID,
            admin: true,
            driver: false,
            email: Some("admin@example.org".to_string()),
            full_name: Some("Ada Admin".to_string()),
        },
        User {
            id: DRIVER_ID,
            admin: false,
            driver: true,
            email: Some("driver@example.org".to_string()),
            full_name: Some("Dana Driver".to_string()),
        },
        User {
            id: RIDER_ID,
            admin: false,
            driver: false,
            email: Some("cgaucho@example.org".to_string()),
            full_name: Some("Chris Gaucho".to_string()),
        },
        User {
            id: OTHER_RIDER_ID,
            admin: false,
            driver: false,
            email: Some("dgaucho@example.org".to_string()),
            full_name: Some("Dominique Gaucho".to_string()),
        },
    ];
    for user in &users {
        store.insert_user(user).await.expect("Failed to seed user");
    }

    let state = Arc::new(AppState { config, store });
    (create_router(state.clone()), state)
}

/// Bearer header value for a seeded user.
#[allow(dead_code)]
pub fn bearer(state: &AppState, user_id: i64) -> String {
    let token = create_jwt(user_id, &state.config.jwt_signing_key).expect("Failed to mint JWT");
    format!("Bearer {}", token)
}

/// Sample descriptive fields used across tests.
#[allow(dead_code)]
pub fn sample_details() -> RideDetails {
    RideDetails {
        day: "Monday".to_string(),
        course: "CMPSC 156".to_string(),
        start_time: "2:00PM".to_string(),
        end_time: "3:15PM".to_string(),
        pickup_location: "Phelps Hall".to_string(),
        dropoff_location: "South Hall".to_string(),
        room: "1431".to_string(),
    }
}

/// Seed a ride owned by `rider_id` directly through the store.
#[allow(dead_code)]
pub async fn seed_ride(state: &AppState, rider_id: i64) -> Ride {
    state
        .store
        .insert_ride(rider_id, &sample_details())
        .await
        .expect("Failed to seed ride")
}

/// Seed a shift owned by `driver_id` directly through the store.
#[allow(dead_code)]
pub async fn seed_shift(state: &AppState, driver_id: i64) -> Shift {
    state
        .store
        .insert_shift(&Shift {
            id: 0,
            driver_id,
            day: "Tuesday".to_string(),
            shift_start: "11AM".to_string(),
            shift_end: "2PM".to_string(),
            driver_backup_id: None,
        })
        .await
        .expect("Failed to seed shift")
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}
