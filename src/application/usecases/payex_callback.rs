use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    application::usecases::response_store::ResponseStoreUseCase,
    domain::{
        repositories::payex_gateway::PayexGateway,
        value_objects::{
            payex_callback::{CallbackOutcome, PayexCallbackForm},
            payex_responses::TransactionStatusModel,
        },
    },
};

pub struct PayexCallbackUseCase {
    gateway: Arc<dyn PayexGateway + Send + Sync>,
    response_store: Arc<ResponseStoreUseCase>,
}

impl PayexCallbackUseCase {
    pub fn new(
        gateway: Arc<dyn PayexGateway + Send + Sync>,
        response_store: Arc<ResponseStoreUseCase>,
    ) -> Self {
        Self {
            gateway,
            response_store,
        }
    }

    /// Fetches and stores the transaction status PayEx is notifying about.
    /// Every failure is reported as `FAILURE` so the gateway retries later.
    pub async fn handle_callback(&self, form: PayexCallbackForm) -> CallbackOutcome {
        let Some(order_ref) = form.order_ref() else {
            warn!(
                transaction_ref = ?form.transaction_ref,
                transaction_number = ?form.transaction_number,
                "payex_callback: orderRef missing"
            );
            return CallbackOutcome::Failure;
        };

        let payload = match self
            .gateway
            .fetch_transaction_status(order_ref.to_string())
            .await
        {
            Ok(payload) => payload,
            Err(err) => {
                error!(order_ref, error = %err, "payex_callback: transaction status lookup failed");
                return CallbackOutcome::Failure;
            }
        };

        match self
            .response_store
            .normalize_and_persist::<TransactionStatusModel>(&payload, true)
            .await
        {
            Ok(transaction) => {
                info!(
                    order_ref,
                    id = ?transaction.id,
                    transaction_number = %transaction.transaction_number,
                    transaction_status = %transaction.transaction_status,
                    "payex_callback: transaction status stored"
                );
                CallbackOutcome::Ok
            }
            Err(err) => {
                error!(order_ref, error = ?err, "payex_callback: storing transaction status failed");
                CallbackOutcome::Failure
            }
        }
    }
}
