use std::{str::FromStr, sync::Arc};

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{
    repositories::payex_gateway::PayexGateway,
    value_objects::{
        enums::agreement_statuses::AgreementStatus,
        payex_responses::AgreementModel,
        response_status::{REQUEST_OK, ResponsePayload, STATUS_KEY},
    },
};

const AGREEMENT_STATUS_KEY: &str = "agreementStatus";

pub struct AgreementVerificationUseCase {
    gateway: Arc<dyn PayexGateway + Send + Sync>,
}

impl AgreementVerificationUseCase {
    pub fn new(gateway: Arc<dyn PayexGateway + Send + Sync>) -> Self {
        Self { gateway }
    }

    /// Asks PayEx whether the customer has confirmed `agreement`.
    pub async fn is_verified(&self, agreement: &AgreementModel) -> bool {
        let response = match self
            .gateway
            .check_agreement(agreement.agreement_ref.clone())
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    agreement_ref = %agreement.agreement_ref,
                    error = %err,
                    "agreements: check failed, treating agreement as unverified"
                );
                return false;
            }
        };

        let verified = request_ok(&response)
            && agreement_status(&response) == Some(AgreementStatus::Verified);
        info!(agreement_ref = %agreement.agreement_ref, verified, "agreements: checked");
        verified
    }
}

fn request_ok(response: &ResponsePayload) -> bool {
    response
        .get(STATUS_KEY)
        .and_then(|status| status.get("description"))
        .and_then(Value::as_str)
        == Some(REQUEST_OK)
}

fn agreement_status(response: &ResponsePayload) -> Option<AgreementStatus> {
    match response.get(AGREEMENT_STATUS_KEY)? {
        Value::String(status) => AgreementStatus::from_str(status).ok(),
        Value::Number(status) => AgreementStatus::from_str(&status.to_string()).ok(),
        _ => None,
    }
}
