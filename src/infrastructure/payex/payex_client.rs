use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    config::config_model::Payex,
    domain::{
        errors::GatewayCommunicationError, repositories::payex_gateway::PayexGateway,
        value_objects::response_status::ResponsePayload,
    },
};

const COMPLETE_PATH: &str = "/pxorder/complete";
const CHECK_AGREEMENT_PATH: &str = "/pxagreement/check";

/// Talks to the PayEx client service, which signs requests with the
/// merchant's encryption key and relays the SOAP answer as JSON.
pub struct PayexHttpClient {
    http: reqwest::Client,
    base_url: String,
    merchant_number: String,
    encryption_key: String,
}

impl PayexHttpClient {
    /// `timeout` bounds each gateway call, connect through body. Hitting it
    /// is a `Transport` error.
    pub fn new(config: &Payex, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            merchant_number: config.merchant_number.clone(),
            encryption_key: config.encryption_key.clone(),
        })
    }

    async fn call(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> std::result::Result<ResponsePayload, GatewayCommunicationError> {
        let url = format!("{}{}", self.base_url, path);
        let mut form = vec![("accountNumber", self.merchant_number.as_str())];
        form.extend_from_slice(params);

        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.encryption_key))
            .form(&form)
            .send()
            .await
            .map_err(|err| GatewayCommunicationError::Transport(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => "<empty response body>".to_string(),
                Err(err) => format!("<failed to read response body: {err}>"),
            };
            error!(status = %status, response_body = %body, path, "payex api request failed");
            return Err(GatewayCommunicationError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        match resp
            .json::<Value>()
            .await
            .map_err(|err| GatewayCommunicationError::Decode(err.to_string()))?
        {
            Value::Object(payload) => {
                debug!(path, "payex api request succeeded");
                Ok(payload)
            }
            other => Err(GatewayCommunicationError::Decode(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl PayexGateway for PayexHttpClient {
    async fn fetch_transaction_status(
        &self,
        order_ref: String,
    ) -> std::result::Result<ResponsePayload, GatewayCommunicationError> {
        self.call(COMPLETE_PATH, &[("orderRef", order_ref.as_str())])
            .await
    }

    async fn check_agreement(
        &self,
        agreement_ref: String,
    ) -> std::result::Result<ResponsePayload, GatewayCommunicationError> {
        self.call(CHECK_AGREEMENT_PATH, &[("agreementRef", agreement_ref.as_str())])
            .await
    }
}
