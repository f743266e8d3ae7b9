// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shift API and role-toggle tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;
use common::{ADMIN_ID, DRIVER_ID, OTHER_RIDER_ID, RIDER_ID};

#[tokio::test]
async fn test_anonymous_cannot_list_shifts() {
    let (app, _) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/shift")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_any_authenticated_user_lists_shifts() {
    let (app, state) = common::create_test_app().await;
    common::seed_shift(&state, DRIVER_ID).await;
    common::seed_shift(&state, DRIVER_ID).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/shift")
                .header(header::AUTHORIZATION, common::bearer(&state, RIDER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_shift_by_id() {
    let (app, state) = common::create_test_app().await;
    let shift = common::seed_shift(&state, DRIVER_ID).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/shift/get?id={}", shift.id))
                .header(header::AUTHORIZATION, common::bearer(&state, RIDER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["id"], shift.id);
    assert_eq!(json["driverId"], DRIVER_ID);
    assert_eq!(json["day"], "Tuesday");
    assert_eq!(json["shiftStart"], "11AM");
    assert_eq!(json["shiftEnd"], "2PM");
}

#[tokio::test]
async fn test_get_missing_shift_returns_404_with_message() {
    let (app, state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/shift/get?id=9")
                .header(header::AUTHORIZATION, common::bearer(&state, RIDER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(response).await;
    assert_eq!(json["type"], "EntityNotFound");
    assert_eq!(json["message"], "Shift with id 9 not found");
}

#[tokio::test]
async fn test_plain_user_cannot_delete_shift() {
    let (app, state) = common::create_test_app().await;
    let shift = common::seed_shift(&state, DRIVER_ID).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/shift/delete?id={}", shift.id))
                .header(header::AUTHORIZATION, common::bearer(&state, RIDER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_driver_deletes_own_shift() {
    let (app, state) = common::create_test_app().await;
    let shift = common::seed_shift(&state, DRIVER_ID).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/shift/delete?id={}", shift.id))
                .header(header::AUTHORIZATION, common::bearer(&state, DRIVER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(
        json["message"],
        format!("Shift with id {} deleted", shift.id)
    );
    assert_eq!(state.store.get_shift(shift.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_driver_cannot_delete_another_drivers_shift() {
    let (app, state) = common::create_test_app().await;
    // Promote the other rider to driver so the shift has a different owner.
    state.store.set_user_driver(OTHER_RIDER_ID, true).await.unwrap();
    let shift = common::seed_shift(&state, OTHER_RIDER_ID).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/shift/delete?id={}", shift.id))
                .header(header::AUTHORIZATION, common::bearer(&state, DRIVER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Owner-scoped miss is reported as not-found, never as forbidden.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(state.store.get_shift(shift.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_admin_deletes_any_shift() {
    let (app, state) = common::create_test_app().await;
    let shift = common::seed_shift(&state, DRIVER_ID).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/shift/delete?id={}", shift.id))
                .header(header::AUTHORIZATION, common::bearer(&state, ADMIN_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.store.get_shift(shift.id).await.unwrap(), None);
}

// ─── Role toggles ────────────────────────────────────────────

#[tokio::test]
async fn test_non_admin_cannot_toggle_roles() {
    let (app, state) = common::create_test_app().await;

    for (caller, uri) in [
        (RIDER_ID, "/api/shift/toggleAdmin?id=4"),
        (DRIVER_ID, "/api/shift/toggleDriver?id=4"),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::AUTHORIZATION, common::bearer(&state, caller))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn test_double_toggle_driver_restores_flag() {
    let (app, state) = common::create_test_app().await;
    let uri = format!("/api/shift/toggleDriver?id={}", RIDER_ID);
    let auth = common::bearer(&state, ADMIN_ID);

    for expected_driver in [true, false] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(&uri)
                    .header(header::AUTHORIZATION, auth.as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = common::body_json(response).await;
        assert_eq!(
            json["message"],
            format!("User with id {} has toggled driver status", RIDER_ID)
        );

        let user = state.store.get_user(RIDER_ID).await.unwrap().unwrap();
        assert_eq!(user.driver, expected_driver);
    }
}

#[tokio::test]
async fn test_toggle_admin_takes_effect_immediately() {
    let (app, state) = common::create_test_app().await;
    let auth = common::bearer(&state, ADMIN_ID);

    // The rider cannot reach an admin route...
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/ride_request/admin/all")
                .header(header::AUTHORIZATION, common::bearer(&state, RIDER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/shift/toggleAdmin?id={}", RIDER_ID))
                .header(header::AUTHORIZATION, auth.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(
        json["message"],
        format!("User with id {} has toggled admin status", RIDER_ID)
    );

    // ...but can with no new token once the flag is flipped, because
    // role flags are loaded from the store on every request.
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/ride_request/admin/all")
                .header(header::AUTHORIZATION, common::bearer(&state, RIDER_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_toggle_missing_user_returns_404() {
    let (app, state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/shift/toggleDriver?id=99")
                .header(header::AUTHORIZATION, common::bearer(&state, ADMIN_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(response).await;
    assert_eq!(json["message"], "User with id 99 not found");
}
