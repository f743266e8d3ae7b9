//! Ride request model.

use serde::{Deserialize, Serialize};

/// A requested ride between two campus locations.
///
/// `id` is assigned by the store on creation and `rider_id` is set at
/// creation time; both are immutable thereafter. The remaining fields
/// are free text with no format validation beyond required presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    /// Surrogate key assigned by the store
    pub id: i64,
    /// Owning rider (ownership anchor)
    pub rider_id: i64,
    /// Day of week
    pub day: String,
    /// Course the ride is for
    pub course: String,
    /// Pickup time
    pub start_time: String,
    /// Dropoff time
    pub end_time: String,
    /// Pickup location
    pub pickup_location: String,
    /// Dropoff location
    pub dropoff_location: String,
    /// Room number at the dropoff building
    pub room: String,
}

/// The mutable descriptive fields of a ride.
///
/// Used both for creation and for full-field replacement on update:
/// every field here overwrites the stored value, there is no
/// partial-patch merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideDetails {
    pub day: String,
    pub course: String,
    pub start_time: String,
    pub end_time: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub room: String,
}
