use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    errors::GatewayCommunicationError, value_objects::response_status::ResponsePayload,
};

/// The PayEx client library as seen from this service. Request signing and
/// merchant credentials live behind this trait.
#[automock]
#[async_trait]
pub trait PayexGateway {
    /// Full status of the transaction behind `order_ref` (PxOrder `Complete`).
    async fn fetch_transaction_status(
        &self,
        order_ref: String,
    ) -> Result<ResponsePayload, GatewayCommunicationError>;

    async fn check_agreement(
        &self,
        agreement_ref: String,
    ) -> Result<ResponsePayload, GatewayCommunicationError>;
}
