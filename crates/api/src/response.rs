//! Shared response envelope types for API handlers.
//!
//! All successful responses use a `{ "data": ... }` envelope. Writes that
//! have nothing to return send `{ "data": null }`.

use serde::Serialize;
use shipdeck_core::types::DbId;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl DataResponse<()> {
    /// The bare acknowledgement, `{ "data": null }`.
    pub fn ack() -> Self {
        DataResponse { data: () }
    }
}

/// Payload returned by create-or-update.
#[derive(Debug, Serialize)]
pub struct SavedId {
    pub id: DbId,
}
