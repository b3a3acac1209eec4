//! Contact form payload and the seam to the transactional email service.
//!
//! Rendering and validating the form happen elsewhere, and so does talking
//! to the email API. This crate fixes the payload shape, the template
//! parameters handed to the API, and the one-shot submit contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
}

/// One submitted contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    /// Database product the visitor asks about
    pub database: String,
    pub message: String,
    pub contact_method: ContactMethod,
    pub urgency: Urgency,
}

impl ContactSubmission {
    /// Parameters for the email template, keyed the way the template expects.
    pub fn template_params(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("from_name", self.name.clone()),
            ("from_email", self.email.clone()),
            ("company", self.company.clone()),
            ("phone", self.phone.clone()),
            ("database", self.database.clone()),
            ("message", self.message.clone()),
            ("contact_method", self.contact_method.to_string()),
            ("urgency", self.urgency.to_string()),
        ])
    }
}

/// Identifies the account and template on the email service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmailServiceKeys {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// The request body an email-service client posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: BTreeMap<&'static str, String>,
}

impl<'a> SendRequest<'a> {
    pub fn new(keys: &'a EmailServiceKeys, submission: &ContactSubmission) -> Self {
        Self {
            service_id: &keys.service_id,
            template_id: &keys.template_id,
            user_id: &keys.public_key,
            template_params: submission.template_params(),
        }
    }

    pub fn to_json(&self) -> Result<String, DeliveryError> {
        serde_json::to_string(self).map_err(|e| DeliveryError::Encode(e.to_string()))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("email service rejected the message: {0}")]
    Rejected(String),
    #[error("email service unreachable: {0}")]
    Unreachable(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// Delivers a rendered request to the email service.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, request: &SendRequest<'_>) -> Result<(), DeliveryError>;
}

/// What the visitor is told after submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Sent,
    Failed(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Sent => "Thanks! We'll be in touch shortly.",
            Notification::Failed(_) => "Something went wrong sending your message. Please try again.",
        }
    }
}

/// Submit once. No retry: a second attempt is a second user action.
pub async fn submit(
    sink: &dyn ContactSink,
    keys: &EmailServiceKeys,
    submission: &ContactSubmission,
) -> Notification {
    let request = SendRequest::new(keys, submission);
    match sink.deliver(&request).await {
        Ok(()) => {
            info!(urgency = %submission.urgency, "contact form delivered");
            Notification::Sent
        }
        Err(e) => {
            warn!("contact form delivery failed: {e}");
            Notification::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::str::FromStr;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        fail_with: Option<DeliveryError>,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ContactSink for RecordingSink {
        async fn deliver(&self, request: &SendRequest<'_>) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(request.to_json()?);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[fixture]
    fn keys() -> EmailServiceKeys {
        EmailServiceKeys {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk_123".into(),
        }
    }

    #[fixture]
    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: "Analytical Engines".into(),
            phone: "555-0100".into(),
            database: "PostgreSQL".into(),
            message: "Our replicas lag.".into(),
            contact_method: ContactMethod::Phone,
            urgency: Urgency::High,
        }
    }

    #[rstest]
    fn template_params_cover_every_field(submission: ContactSubmission) {
        let params = submission.template_params();
        assert_eq!(params.len(), 8);
        assert_eq!(params["from_name"], "Ada");
        assert_eq!(params["database"], "PostgreSQL");
        assert_eq!(params["contact_method"], "phone");
        assert_eq!(params["urgency"], "high");
    }

    #[rstest]
    fn payload_uses_form_field_names() {
        let json = r#"{"name":"Ada","email":"a@b.c","company":"","phone":"","database":"MySQL",
            "message":"hi","contactMethod":"email","urgency":"low"}"#;
        let parsed: ContactSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.contact_method, ContactMethod::Email);
        assert_eq!(parsed.urgency, Urgency::Low);
    }

    #[rstest]
    #[case("email", ContactMethod::Email)]
    #[case("phone", ContactMethod::Phone)]
    fn contact_method_parses(#[case] raw: &str, #[case] expected: ContactMethod) {
        assert_eq!(ContactMethod::from_str(raw).unwrap(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn successful_delivery_notifies_sent(keys: EmailServiceKeys, submission: ContactSubmission) {
        let sink = RecordingSink::default();
        let notification = submit(&sink, &keys, &submission).await;
        assert_eq!(notification, Notification::Sent);

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains(r#""service_id":"service_abc""#));
        assert!(sent[0].contains(r#""user_id":"pk_123""#));
    }

    #[rstest]
    #[tokio::test]
    async fn failure_is_reported_after_a_single_attempt(
        keys: EmailServiceKeys,
        submission: ContactSubmission,
    ) {
        let sink = RecordingSink {
            fail_with: Some(DeliveryError::Unreachable("connection refused".into())),
            ..Default::default()
        };
        let notification = submit(&sink, &keys, &submission).await;
        assert!(matches!(notification, Notification::Failed(ref m) if m.contains("connection refused")));
        assert_eq!(sink.sent.lock().unwrap().len(), 1);
    }
}
