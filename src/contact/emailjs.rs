//! EmailJS relay: the hosted service that turns a template plus parameters
//! into an e-mail in the site owner's inbox.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use super::EmailDispatch;

pub const DEFAULT_API_BASE: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Identifiers of the EmailJS account used by the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_base: String,
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Reads the identifiers baked in at compile time (see `build.rs`).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let service_id = required("EMAILJS_SERVICE_ID", service_id)?;
        let template_id = required("EMAILJS_TEMPLATE_ID", template_id)?;
        let public_key = required("EMAILJS_PUBLIC_KEY", public_key)?;
        Ok(Self::new(service_id, template_id, public_key))
    }

    pub fn send_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), SEND_PATH)
    }
}

// Empty values and the `YOUR_..._ID` placeholders from the sample setup count as unset.
fn required(var: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && !v.starts_with("YOUR_") => Ok(v.to_string()),
        _ => Err(ConfigError::Missing(var)),
    }
}

/// Values substituted into the EmailJS template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    #[serde(rename = "title")]
    pub subject: String,
    pub message: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl<'a> SendRequest<'a> {
    fn new(config: &'a EmailJsConfig, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmailJsClient {
    client: Client,
}

impl EmailJsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl EmailDispatch for EmailJsClient {
    async fn send(&self, config: EmailJsConfig, params: TemplateParams) -> Result<(), DispatchError> {
        let resp = self
            .client
            .post(config.send_url())
            .json(&SendRequest::new(&config, &params))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DispatchError::Status { status, body });
        }
        Ok(())
    }
}
