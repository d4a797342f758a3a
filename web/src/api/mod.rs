pub mod error;

use std::sync::OnceLock;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared_types::{Booking, BookingId, NewBooking};

use crate::config::ApiConfig;
pub use error::ApiError;

static API_CLIENT: OnceLock<BookingApiClient> = OnceLock::new();

pub fn init_client(config: &ApiConfig) -> Result<(), ApiError> {
    let client = BookingApiClient::new(config)?;
    API_CLIENT
        .set(client)
        .map_err(|_| ApiError::AlreadyInitialized)
}

pub fn get_client() -> Result<&'static BookingApiClient, ApiError> {
    API_CLIENT.get().ok_or(ApiError::NotInitialized)
}

/// What the API said to a create request, when it answered at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateResponse {
    Created { id: Option<BookingId> },
    Rejected { status: u16, message: Option<String> },
}

#[derive(Deserialize)]
struct CreatedBody {
    id: Option<BookingId>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookingApiClient {
    http: Client,
    base_url: String,
}

impl BookingApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let response = self.http.get(self.url("/api/bookings")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Bookings for the listing page. Failures are logged and read as an
    /// empty collection.
    pub async fn bookings_or_empty(&self) -> Vec<Booking> {
        match self.fetch_bookings().await {
            Ok(bookings) => bookings,
            Err(e) => {
                tracing::error!(error = %e, base_url = %self.base_url, "Failed to fetch bookings");
                Vec::new()
            }
        }
    }

    /// `Ok(None)` when the API answers 404.
    pub async fn fetch_booking(&self, id: &str) -> Result<Option<Booking>, ApiError> {
        let path = format!("/api/bookings/{}", urlencoding::encode(id));
        let response = self.http.get(self.url(&path)).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<CreateResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/bookings"))
            .json(booking)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::CREATED {
            let id = serde_json::from_str::<CreatedBody>(&body)
                .ok()
                .and_then(|created| created.id);
            return Ok(CreateResponse::Created { id });
        }

        let message = serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());
        Ok(CreateResponse::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
