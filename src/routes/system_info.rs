// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static application info, typically environment values the frontend
//! needs. Admin only.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::SystemInfo;
use crate::policy::Action;
use crate::routes::authorize;
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/systemInfo", get(get_system_info))
}

async fn get_system_info(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<SystemInfo>> {
    authorize(&user, Action::ReadSystemInfo)?;

    Ok(Json(SystemInfo {
        source_repo: state.config.source_repo_url.clone(),
        commit_id: state.config.commit_id.clone(),
        commit_message: state.config.commit_message.clone(),
    }))
}
