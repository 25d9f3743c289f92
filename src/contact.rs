use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::config::RelayConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("message relay is not configured")]
    NotConfigured,
    #[error("couldn't reach the message relay: {0}")]
    Relay(String),
    #[error("message relay rejected the message with status {0}")]
    Rejected(u16),
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !email.chars().any(char::is_whitespace)
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(*name));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

/// Request body understood by the email relay's send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    /// The relay's public key.
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayPayload {
    pub fn new(service_id: &str, template_id: &str, public_key: &str, form: &ContactForm) -> Self {
        Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            user_id: public_key.to_string(),
            template_params: TemplateParams {
                from_name: form.name.trim().to_string(),
                from_email: form.email.trim().to_string(),
                subject: form.subject.trim().to_string(),
                message: form.message.trim().to_string(),
            },
        }
    }
}

/// Sends one message through the relay. Single attempt, no retry.
#[cfg(feature = "ssr")]
pub async fn deliver(relay: Option<&RelayConfig>, form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;
    let relay = relay.ok_or(ContactError::NotConfigured)?;
    let payload = RelayPayload::new(
        &relay.service_id,
        &relay.template_id,
        &relay.public_key,
        form,
    );

    let resp = reqwest::Client::new()
        .post(&relay.endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ContactError::Relay(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "relay rejected contact message");
        return Err(ContactError::Rejected(status.as_u16()));
    }
    tracing::info!("contact message relayed");
    Ok(())
}
