use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Booking API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Booking API returned status {0}")]
    Status(u16),

    #[error("Booking API sent an unreadable body: {0}")]
    Decode(String),

    #[error("Booking API client already initialized")]
    AlreadyInitialized,

    #[error("Booking API client not initialized")]
    NotInitialized,
}
