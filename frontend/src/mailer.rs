use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::forms::ApplicationPayload;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("could not build email request: {0}")]
    Encode(String),
    #[error("email service unreachable: {0}")]
    Transport(String),
    #[error("email service rejected the message with status {0}")]
    Rejected(u16),
}

#[derive(Serialize)]
pub struct EmailRequest<'a, T: Serialize> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a T,
}

impl<'a, T: Serialize> EmailRequest<'a, T> {
    pub fn with_configured_keys(template_params: &'a T) -> Self {
        Self {
            service_id: config::emailjs_service_id(),
            template_id: config::emailjs_template_id(),
            user_id: config::emailjs_public_key(),
            template_params,
        }
    }
}

/// Sends a job application through the hosted email service.
pub async fn send(payload: &ApplicationPayload) -> Result<(), MailError> {
    let body = EmailRequest::with_configured_keys(payload);
    let request = Request::post(config::EMAILJS_ENDPOINT)
        .json(&body)
        .map_err(|e| MailError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| MailError::Transport(e.to_string()))?;

    if !response.ok() {
        error!("Application email for {} failed with status {}", payload.job_title, response.status());
        return Err(MailError::Rejected(response.status()));
    }
    info!("Application email sent for {}", payload.job_title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_service_shape() {
        let payload = ApplicationPayload {
            job_title: "Project Manager".into(),
            from_name: "Meera Iyer".into(),
            from_email: "meera@example.com".into(),
            phone: "12345".into(),
            experience: "9".into(),
            cover_letter: String::new(),
        };
        let body = EmailRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &payload,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_id"], "tpl");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["job_title"], "Project Manager");
        assert_eq!(json["template_params"]["from_email"], "meera@example.com");
    }

    #[test]
    fn configured_keys_fall_back_to_placeholders() {
        let payload = serde_json::json!({});
        let body = EmailRequest::with_configured_keys(&payload);
        assert!(!body.service_id.is_empty());
        assert!(!body.user_id.is_empty());
    }
}
