
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: the backend serves this app from the same origin
}

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Credentials for the hosted email service are baked in at build time.
pub fn emailjs_service_id() -> &'static str {
    option_env!("EMAILJS_SERVICE_ID").unwrap_or("YOUR_SERVICE_ID")
}

pub fn emailjs_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("YOUR_TEMPLATE_ID")
}

pub fn emailjs_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("YOUR_PUBLIC_KEY")
}
