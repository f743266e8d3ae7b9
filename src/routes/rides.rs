// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride request routes.
//!
//! Owner-scoped routes implicitly filter to the caller's rides; the
//! parallel `/admin` family bypasses ownership but requires the Admin
//! role. An owner-scoped lookup of someone else's ride is a 404,
//! indistinguishable from a missing id.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{GenericMessage, Ride, RideDetails};
use crate::policy::{Action, Scope};
use crate::routes::{authorize, IdParam};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Form, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/ride_request",
            get(get_ride).put(update_ride).delete(delete_ride),
        )
        .route("/api/ride_request/all", get(list_rides))
        .route("/api/ride_request/post", axum::routing::post(create_ride))
        .route(
            "/api/ride_request/admin",
            get(get_ride_admin).delete(delete_ride_admin),
        )
        .route("/api/ride_request/admin/all", get(list_rides_admin))
}

// ─── Owner-scoped family ─────────────────────────────────────

/// List the caller's own rides.
async fn list_rides(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Ride>>> {
    let rides = match authorize(&user, Action::ListRides)? {
        Scope::Owner => state.store.list_rides_for_rider(user.id).await?,
        Scope::Any => state.store.list_rides().await?,
    };
    Ok(Json(rides))
}

/// Get a single ride owned by the caller.
async fn get_ride(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<Ride>> {
    let ride = match authorize(&user, Action::GetRide)? {
        Scope::Owner => state.store.get_ride_for_rider(params.id, user.id).await?,
        Scope::Any => state.store.get_ride(params.id).await?,
    };

    let ride = ride.ok_or_else(|| AppError::not_found("Ride", params.id))?;
    Ok(Json(ride))
}

/// Create form fields. `riderId` is honored only for admin callers;
/// everyone else gets the ride assigned to themselves.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRideForm {
    rider_id: Option<i64>,
    day: String,
    course: String,
    start_time: String,
    end_time: String,
    pickup_location: String,
    dropoff_location: String,
    room: String,
}

/// Create a new ride.
async fn create_ride(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Form(form): Form<CreateRideForm>,
) -> Result<Json<Ride>> {
    let rider_id = match authorize(&user, Action::CreateRide)? {
        Scope::Owner => user.id,
        Scope::Any => form.rider_id.unwrap_or(user.id),
    };

    let details = RideDetails {
        day: form.day,
        course: form.course,
        start_time: form.start_time,
        end_time: form.end_time,
        pickup_location: form.pickup_location,
        dropoff_location: form.dropoff_location,
        room: form.room,
    };

    tracing::info!(rider_id, day = %details.day, "Creating ride");

    let ride = state.store.insert_ride(rider_id, &details).await?;
    Ok(Json(ride))
}

/// Replace every descriptive field of a ride (admin only). `id` and
/// `riderId` are immutable; there is no partial-patch merging.
async fn update_ride(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
    Json(details): Json<RideDetails>,
) -> Result<Json<Ride>> {
    authorize(&user, Action::UpdateRide)?;

    let existing = state
        .store
        .get_ride(params.id)
        .await?
        .ok_or_else(|| AppError::not_found("Ride", params.id))?;

    // Read-then-write: a concurrent delete between the two store calls
    // loses the update silently (single-row write, no transaction).
    state.store.update_ride(params.id, &details).await?;

    Ok(Json(Ride {
        id: existing.id,
        rider_id: existing.rider_id,
        day: details.day,
        course: details.course,
        start_time: details.start_time,
        end_time: details.end_time,
        pickup_location: details.pickup_location,
        dropoff_location: details.dropoff_location,
        room: details.room,
    }))
}

/// Delete a ride owned by the caller (admins may delete any).
async fn delete_ride(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<GenericMessage>> {
    let deleted = match authorize(&user, Action::DeleteRide)? {
        Scope::Owner => {
            state
                .store
                .delete_ride_for_rider(params.id, user.id)
                .await?
        }
        Scope::Any => state.store.delete_ride(params.id).await?,
    };

    if !deleted {
        return Err(AppError::not_found("Ride", params.id));
    }

    tracing::info!(ride_id = params.id, "Ride deleted");
    Ok(Json(GenericMessage::new(format!(
        "Ride with id {} deleted",
        params.id
    ))))
}

// ─── Admin-scoped family ─────────────────────────────────────

/// List every ride regardless of owner.
async fn list_rides_admin(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Ride>>> {
    authorize(&user, Action::ListRidesAdmin)?;
    let rides = state.store.list_rides().await?;
    Ok(Json(rides))
}

/// Get any ride by id regardless of owner.
async fn get_ride_admin(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<Ride>> {
    authorize(&user, Action::GetRideAdmin)?;
    let ride = state
        .store
        .get_ride(params.id)
        .await?
        .ok_or_else(|| AppError::not_found("Ride", params.id))?;
    Ok(Json(ride))
}

/// Delete any ride by id regardless of owner.
async fn delete_ride_admin(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<GenericMessage>> {
    authorize(&user, Action::DeleteRideAdmin)?;

    if !state.store.delete_ride(params.id).await? {
        return Err(AppError::not_found("Ride", params.id));
    }

    tracing::info!(ride_id = params.id, "Ride deleted by admin");
    Ok(Json(GenericMessage::new(format!(
        "Ride with id {} deleted",
        params.id
    ))))
}
