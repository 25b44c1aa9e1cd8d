use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill required fields")]
    MissingFields { detail: &'static str },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FormError {
    /// Second line of the toast shown for this error.
    pub fn detail(&self) -> &'static str {
        match self {
            FormError::MissingFields { detail } => *detail,
            FormError::InvalidEmail => "We need a working address to get back to you.",
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

/// What leaves the browser when the contact form goes through.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Company => self.company = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.message) {
            return Err(FormError::MissingFields {
                detail: "Name, email, and message are required.",
            });
        }
        if !looks_like_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates, then hands back the message and leaves every field empty.
    /// On error the form is left as the visitor typed it.
    pub fn submit(&mut self) -> Result<ContactMessage, FormError> {
        self.validate()?;
        let form = std::mem::take(self);
        Ok(ContactMessage {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: optional(form.phone),
            company: optional(form.company),
            subject: optional(form.subject),
            message: form.message.trim().to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationField {
    FirstName,
    LastName,
    Email,
    Phone,
    Experience,
    CoverLetter,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub job_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub cover_letter: String,
}

/// Template parameters for the careers email template.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationPayload {
    pub job_title: String,
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub experience: String,
    pub cover_letter: String,
}

impl ApplicationForm {
    pub fn for_job(job_title: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: ApplicationField, value: String) {
        match field {
            ApplicationField::FirstName => self.first_name = value,
            ApplicationField::LastName => self.last_name = value,
            ApplicationField::Email => self.email = value,
            ApplicationField::Phone => self.phone = value,
            ApplicationField::Experience => self.experience = value,
            ApplicationField::CoverLetter => self.cover_letter = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.first_name) || is_blank(&self.email) || is_blank(&self.phone) {
            return Err(FormError::MissingFields {
                detail: "First name, email, and phone are required.",
            });
        }
        if !looks_like_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Like `ContactForm::submit`, but the chosen job stays selected.
    pub fn submit(&mut self) -> Result<ApplicationPayload, FormError> {
        self.validate()?;
        let fresh = Self::for_job(&self.job_title);
        let form = std::mem::replace(self, fresh);
        let from_name = format!("{} {}", form.first_name.trim(), form.last_name.trim())
            .trim_end()
            .to_string();
        Ok(ApplicationPayload {
            job_title: form.job_title,
            from_name,
            from_email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            experience: form.experience.trim().to_string(),
            cover_letter: form.cover_letter.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Asha Verma".into());
        form.set(ContactField::Email, "asha@example.com".into());
        form.set(ContactField::Company, "Northern Works".into());
        form.set(ContactField::Message, "Need a quote for USFD testing.".into());
        form
    }

    #[test]
    fn contact_requires_name_email_and_message() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled_contact();
            form.set(field, "   ".into());
            let before = form.clone();
            let err = form.submit().unwrap_err();
            assert_eq!(err.to_string(), "Please fill required fields");
            assert_eq!(err.detail(), "Name, email, and message are required.");
            assert_eq!(form, before);
        }
    }

    #[test]
    fn contact_submit_clears_every_field() {
        let mut form = filled_contact();
        form.set(ContactField::Subject, "Quote".into());
        let message = form.submit().unwrap();
        assert_eq!(message.name, "Asha Verma");
        assert_eq!(message.company.as_deref(), Some("Northern Works"));
        assert_eq!(message.phone, None);
        assert_eq!(form, ContactForm::default());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn contact_rejects_malformed_email() {
        let mut form = filled_contact();
        form.set(ContactField::Email, "asha.example.com".into());
        assert_eq!(form.submit(), Err(FormError::InvalidEmail));
        assert_eq!(form.email, "asha.example.com");
    }

    #[test]
    fn optional_fields_are_left_out_of_json() {
        let message = filled_contact().submit().unwrap();
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["company"], "Northern Works");
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("  hr@khemchandgroup.com "));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@.com"));
        assert!(!looks_like_email("a@com."));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@@b.com"));
        assert!(!looks_like_email("a b@c.com"));
    }

    #[test]
    fn application_keeps_job_after_submit() {
        let mut form = ApplicationForm::for_job("Welding Technician");
        form.set(ApplicationField::FirstName, "Ravi".into());
        form.set(ApplicationField::LastName, "Patel".into());
        form.set(ApplicationField::Email, "ravi@example.com".into());
        form.set(ApplicationField::Phone, "+91 98765 43210".into());
        form.set(ApplicationField::Experience, "4".into());

        let payload = form.submit().unwrap();
        assert_eq!(payload.job_title, "Welding Technician");
        assert_eq!(payload.from_name, "Ravi Patel");
        assert_eq!(form, ApplicationForm::for_job("Welding Technician"));
    }

    #[test]
    fn application_requires_contact_details() {
        let mut form = ApplicationForm::for_job("Project Manager");
        form.set(ApplicationField::FirstName, "Meera".into());
        let err = form.submit().unwrap_err();
        assert_eq!(err.detail(), "First name, email, and phone are required.");
        assert_eq!(form.first_name, "Meera");
    }

    #[test]
    fn application_name_without_last_name() {
        let mut form = ApplicationForm::for_job("Project Manager");
        form.set(ApplicationField::FirstName, "Meera".into());
        form.set(ApplicationField::Email, "meera@example.com".into());
        form.set(ApplicationField::Phone, "12345".into());
        assert_eq!(form.submit().unwrap().from_name, "Meera");
    }
}
