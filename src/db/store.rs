// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite store with typed operations.
//!
//! Provides keyed and owner-scoped lookup, insert, full-record update
//! and delete for each entity. Scoping is explicit in the method name:
//! `get_ride` fetches by id alone, `get_ride_for_rider` additionally
//! filters on the owner column and reports someone else's record the
//! same way as a missing one.

use crate::error::AppError;
use crate::models::{Ride, RideDetails, Shift, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    admin       INTEGER NOT NULL DEFAULT 0,
    driver      INTEGER NOT NULL DEFAULT 0,
    email       TEXT,
    full_name   TEXT
);
CREATE TABLE IF NOT EXISTS rides (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    rider_id         INTEGER NOT NULL,
    day              TEXT NOT NULL,
    course           TEXT NOT NULL,
    start_time       TEXT NOT NULL,
    end_time         TEXT NOT NULL,
    pickup_location  TEXT NOT NULL,
    dropoff_location TEXT NOT NULL,
    room             TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS shifts (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    driver_id        INTEGER NOT NULL,
    day              TEXT NOT NULL,
    shift_start      TEXT NOT NULL,
    shift_end        TEXT NOT NULL,
    driver_backup_id INTEGER
);
"#;

/// SQLite-backed entity store.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database and create the schema if needed.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::Database(format!("Invalid DATABASE_URL: {}", e)))?
            .create_if_missing(true);

        // An in-memory SQLite database exists per connection; keep the
        // pool at a single connection so every request sees the same data.
        let pool_opts = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_opts
            .connect_with(connect_opts)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        sqlx::raw_sql(SCHEMA).execute(&pool).await?;

        tracing::info!(url = database_url, "Connected to SQLite");

        Ok(Self { pool })
    }

    // ─── Rides ───────────────────────────────────────────────────

    /// All rides, regardless of owner.
    pub async fn list_rides(&self) -> Result<Vec<Ride>, AppError> {
        let rides = sqlx::query_as::<_, Ride>("SELECT * FROM rides ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rides)
    }

    /// Rides owned by `rider_id` only.
    pub async fn list_rides_for_rider(&self, rider_id: i64) -> Result<Vec<Ride>, AppError> {
        let rides =
            sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE rider_id = ? ORDER BY id")
                .bind(rider_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(rides)
    }

    /// Fetch a ride by id alone.
    pub async fn get_ride(&self, id: i64) -> Result<Option<Ride>, AppError> {
        let ride = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ride)
    }

    /// Fetch a ride by id, scoped to its owner. Returns `None` both when
    /// the id is absent and when the ride belongs to someone else.
    pub async fn get_ride_for_rider(
        &self,
        id: i64,
        rider_id: i64,
    ) -> Result<Option<Ride>, AppError> {
        let ride = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE id = ? AND rider_id = ?")
            .bind(id)
            .bind(rider_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ride)
    }

    /// Insert a new ride owned by `rider_id`; the store assigns the id.
    pub async fn insert_ride(
        &self,
        rider_id: i64,
        details: &RideDetails,
    ) -> Result<Ride, AppError> {
        let result = sqlx::query(
            "INSERT INTO rides \
             (rider_id, day, course, start_time, end_time, pickup_location, dropoff_location, room) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(rider_id)
        .bind(&details.day)
        .bind(&details.course)
        .bind(&details.start_time)
        .bind(&details.end_time)
        .bind(&details.pickup_location)
        .bind(&details.dropoff_location)
        .bind(&details.room)
        .execute(&self.pool)
        .await?;

        Ok(Ride {
            id: result.last_insert_rowid(),
            rider_id,
            day: details.day.clone(),
            course: details.course.clone(),
            start_time: details.start_time.clone(),
            end_time: details.end_time.clone(),
            pickup_location: details.pickup_location.clone(),
            dropoff_location: details.dropoff_location.clone(),
            room: details.room.clone(),
        })
    }

    /// Overwrite every descriptive field of a ride. `id` and `rider_id`
    /// are untouched. Returns false when the id is absent.
    pub async fn update_ride(&self, id: i64, details: &RideDetails) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE rides SET day = ?, course = ?, start_time = ?, end_time = ?, \
             pickup_location = ?, dropoff_location = ?, room = ? WHERE id = ?",
        )
        .bind(&details.day)
        .bind(&details.course)
        .bind(&details.start_time)
        .bind(&details.end_time)
        .bind(&details.pickup_location)
        .bind(&details.dropoff_location)
        .bind(&details.room)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a ride by id alone. Returns false when the id is absent.
    pub async fn delete_ride(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rides WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a ride scoped to its owner. Someone else's ride is reported
    /// the same way as a missing one.
    pub async fn delete_ride_for_rider(&self, id: i64, rider_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rides WHERE id = ? AND rider_id = ?")
            .bind(id)
            .bind(rider_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ─── Shifts ──────────────────────────────────────────────────

    pub async fn list_shifts(&self) -> Result<Vec<Shift>, AppError> {
        let shifts = sqlx::query_as::<_, Shift>("SELECT * FROM shifts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(shifts)
    }

    pub async fn get_shift(&self, id: i64) -> Result<Option<Shift>, AppError> {
        let shift = sqlx::query_as::<_, Shift>("SELECT * FROM shifts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(shift)
    }

    /// Insert a new shift owned by `driver_id`; the store assigns the id.
    pub async fn insert_shift(&self, shift: &Shift) -> Result<Shift, AppError> {
        let result = sqlx::query(
            "INSERT INTO shifts (driver_id, day, shift_start, shift_end, driver_backup_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(shift.driver_id)
        .bind(&shift.day)
        .bind(&shift.shift_start)
        .bind(&shift.shift_end)
        .bind(shift.driver_backup_id)
        .execute(&self.pool)
        .await?;

        Ok(Shift {
            id: result.last_insert_rowid(),
            ..shift.clone()
        })
    }

    pub async fn delete_shift(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM shifts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a shift scoped to its owning driver.
    pub async fn delete_shift_for_driver(
        &self,
        id: i64,
        driver_id: i64,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM shifts WHERE id = ? AND driver_id = ?")
            .bind(id)
            .bind(driver_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ─── Users ───────────────────────────────────────────────────

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Insert a user with an explicit id (account provisioning and tests;
    /// this service never creates accounts on its own).
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO users (id, admin, driver, email, full_name) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(user.admin)
        .bind(user.driver)
        .bind(&user.email)
        .bind(&user.full_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn set_user_admin(&self, id: i64, admin: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET admin = ? WHERE id = ?")
            .bind(admin)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn set_user_driver(&self, id: i64, driver: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET driver = ? WHERE id = ?")
            .bind(driver)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
