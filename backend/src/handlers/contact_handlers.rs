use std::collections::VecDeque;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::AppState;

/// Oldest submissions are dropped past this many.
pub const MAX_INBOX: usize = 500;

const MISSING_FIELDS: &str = "Name, email, and message are required";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub request: ContactRequest,
}

/// Submissions kept in memory since startup, newest last.
#[derive(Debug, Default)]
pub struct Inbox {
    entries: VecDeque<ContactSubmission>,
}

impl Inbox {
    pub fn push(&mut self, submission: ContactSubmission) {
        if self.entries.len() == MAX_INBOX {
            self.entries.pop_front();
        }
        self.entries.push_back(submission);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &ContactSubmission> {
        self.entries.iter()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(MISSING_FIELDS);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err("Invalid email address");
        }
        Ok(())
    }

    fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: keep(self.phone),
            company: keep(self.company),
            subject: keep(self.subject),
            message: self.message.trim().to_string(),
        }
    }
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Unreadable contact submission: {}", rejection.body_text());
            // a missing field is the common case, so report it like an empty one
            let reason = match rejection {
                JsonRejection::JsonDataError(_) => MISSING_FIELDS,
                _ => "Request body must be a JSON contact message",
            };
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": reason}))
            ));
        }
    };

    if let Err(reason) = request.validate() {
        tracing::warn!("Rejected contact submission: {}", reason);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": reason}))
        ));
    }

    let request = request.normalized();
    let mut inbox = state.inbox.lock().await;
    tracing::info!(
        name = %request.name,
        email = %request.email,
        subject = request.subject.as_deref().unwrap_or("-"),
        "Contact form submission received"
    );
    inbox.push(ContactSubmission {
        received_at: Utc::now(),
        request,
    });
    tracing::debug!("Inbox holds {} submissions", inbox.len());

    Ok(Json(json!({
        "message": "Message received"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            subject: None,
            message: message.into(),
        }
    }

    #[test]
    fn requires_name_email_and_message() {
        assert!(request("Asha", "asha@example.com", "Hello").validate().is_ok());
        assert_eq!(
            request(" ", "asha@example.com", "Hello").validate(),
            Err("Name, email, and message are required")
        );
        assert!(request("Asha", "", "Hello").validate().is_err());
        assert!(request("Asha", "asha@example.com", "\n").validate().is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["asha", "asha@example", "a sha@example.com", "@example.com"] {
            assert_eq!(
                request("Asha", email, "Hello").validate(),
                Err("Invalid email address"),
                "{email}"
            );
        }
    }

    #[test]
    fn inbox_drops_oldest_past_limit() {
        let mut inbox = Inbox::default();
        for i in 0..MAX_INBOX + 5 {
            inbox.push(ContactSubmission {
                received_at: Utc::now(),
                request: request(&format!("Sender {i}"), "asha@example.com", "Hello"),
            });
        }
        assert_eq!(inbox.len(), MAX_INBOX);
        assert_eq!(inbox.iter().next().map(|s| s.request.name.as_str()), Some("Sender 5"));
        let newest = format!("Sender {}", MAX_INBOX + 4);
        assert_eq!(inbox.iter().last().map(|s| s.request.name.as_str()), Some(newest.as_str()));
    }

    #[test]
    fn normalizing_drops_blank_optionals() {
        let mut req = request(" Asha ", " asha@example.com", "Hello ");
        req.company = Some("  ".into());
        req.subject = Some(" Quote ".into());
        let req = req.normalized();
        assert_eq!(req.name, "Asha");
        assert_eq!(req.company, None);
        assert_eq!(req.subject.as_deref(), Some("Quote"));
    }
}
