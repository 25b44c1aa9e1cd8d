use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::forms::ContactMessage;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not build request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("{0}")]
    Server(String),
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Posts a contact-form message to the site backend.
pub async fn send_contact(message: &ContactMessage) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(message)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        info!("Contact message from {} delivered", message.email);
        return Ok(());
    }

    let status = response.status();
    let reason = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("status {}", status),
    };
    error!("Contact message rejected: {}", reason);
    Err(ApiError::Server(reason))
}
