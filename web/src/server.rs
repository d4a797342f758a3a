use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{Booking, BookingId, NewBooking};

#[cfg(feature = "ssr")]
use crate::api::{get_client, CreateResponse};

/// Result of a create request that reached the booking API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: Option<BookingId> },
    Rejected { message: Option<String> },
}

#[server]
pub async fn list_bookings() -> Result<Vec<Booking>, ServerFnError> {
    let client = get_client().map_err(|e| {
        tracing::error!(error = %e, "Cannot list bookings");
        ServerFnError::new(e.to_string())
    })?;

    Ok(client.bookings_or_empty().await)
}

/// `Ok(None)` when the booking does not exist.
#[server]
pub async fn get_booking(id: String) -> Result<Option<Booking>, ServerFnError> {
    let client = get_client().map_err(|e| ServerFnError::new(e.to_string()))?;

    match client.fetch_booking(&id).await {
        Ok(Some(booking)) => Ok(Some(booking)),
        Ok(None) => {
            tracing::info!(booking_id = %id, "Booking not found");
            Ok(None)
        }
        Err(e) => {
            tracing::error!(booking_id = %id, error = %e, "Failed to fetch booking");
            Err(ServerFnError::new(format!("Failed to fetch booking: {}", e)))
        }
    }
}

#[server]
pub async fn create_booking(booking: NewBooking) -> Result<SubmitOutcome, ServerFnError> {
    let client = get_client().map_err(|e| ServerFnError::new(e.to_string()))?;

    match client.create_booking(&booking).await {
        Ok(CreateResponse::Created { id }) => {
            tracing::info!(booking_id = ?id, "Booking created");
            Ok(SubmitOutcome::Created { id })
        }
        Ok(CreateResponse::Rejected { status, message }) => {
            tracing::warn!(status, message = ?message, "Booking API rejected new booking");
            Ok(SubmitOutcome::Rejected { message })
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create booking");
            Err(ServerFnError::new(format!("Failed to create booking: {}", e)))
        }
    }
}
