// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shift routes and user role toggles.
//!
//! Shifts are readable by every authenticated caller; deletion is
//! limited to the owning driver or an admin. The role toggles live
//! under this route family alongside the driver schedule management.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{GenericMessage, Shift};
use crate::policy::{Action, Scope};
use crate::routes::{authorize, IdParam};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/shift", get(list_shifts))
        .route("/api/shift/get", get(get_shift))
        .route("/api/shift/delete", delete(delete_shift))
        .route("/api/shift/toggleAdmin", post(toggle_admin))
        .route("/api/shift/toggleDriver", post(toggle_driver))
}

/// List all shifts.
async fn list_shifts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Shift>>> {
    authorize(&user, Action::ListShifts)?;
    let shifts = state.store.list_shifts().await?;
    Ok(Json(shifts))
}

/// Get a shift by id.
async fn get_shift(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<Shift>> {
    authorize(&user, Action::GetShift)?;
    let shift = state
        .store
        .get_shift(params.id)
        .await?
        .ok_or_else(|| AppError::not_found("Shift", params.id))?;
    Ok(Json(shift))
}

/// Delete a shift. Drivers may only delete their own; admins any.
async fn delete_shift(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<GenericMessage>> {
    let deleted = match authorize(&user, Action::DeleteShift)? {
        Scope::Owner => {
            state
                .store
                .delete_shift_for_driver(params.id, user.id)
                .await?
        }
        Scope::Any => state.store.delete_shift(params.id).await?,
    };

    if !deleted {
        return Err(AppError::not_found("Shift", params.id));
    }

    tracing::info!(shift_id = params.id, "Shift deleted");
    Ok(Json(GenericMessage::new(format!(
        "Shift with id {} deleted",
        params.id
    ))))
}

/// Flip the target user's admin flag (admin only).
async fn toggle_admin(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<GenericMessage>> {
    authorize(&user, Action::ToggleAdmin)?;

    let target = state
        .store
        .get_user(params.id)
        .await?
        .ok_or_else(|| AppError::not_found("User", params.id))?;

    // Read-then-write: two concurrent toggles can lose one flip
    // (single-row write, no transaction around the pair).
    state.store.set_user_admin(params.id, !target.admin).await?;

    tracing::info!(user_id = params.id, admin = !target.admin, "Toggled admin flag");
    Ok(Json(GenericMessage::new(format!(
        "User with id {} has toggled admin status",
        params.id
    ))))
}

/// Flip the target user's driver flag (admin only).
async fn toggle_driver(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<IdParam>,
) -> Result<Json<GenericMessage>> {
    authorize(&user, Action::ToggleDriver)?;

    let target = state
        .store
        .get_user(params.id)
        .await?
        .ok_or_else(|| AppError::not_found("User", params.id))?;

    state
        .store
        .set_user_driver(params.id, !target.driver)
        .await?;

    tracing::info!(user_id = params.id, driver = !target.driver, "Toggled driver flag");
    Ok(Json(GenericMessage::new(format!(
        "User with id {} has toggled driver status",
        params.id
    ))))
}
