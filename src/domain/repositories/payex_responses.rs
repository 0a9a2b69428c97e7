use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    agreements::AgreementEntity,
    autopay_statuses::AutoPayStatusEntity,
    initialized_payments::InitializedPaymentEntity,
    payex_responses::{InsertPayexResponseEntity, PayexResponseEntity},
    transaction_statuses::TransactionStatusEntity,
};

/// Durable storage for gateway responses. Rows are only ever inserted, lookups
/// by natural reference return every stored snapshot, newest first.
#[automock]
#[async_trait]
pub trait PayexResponseRepository {
    async fn insert(&self, entity: InsertPayexResponseEntity) -> Result<PayexResponseEntity>;

    async fn find_initialized_payment_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<InitializedPaymentEntity>>;
    async fn find_initialized_payments_by_order_ref(
        &self,
        order_ref: String,
    ) -> Result<Vec<InitializedPaymentEntity>>;

    async fn find_transaction_status_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<TransactionStatusEntity>>;
    async fn find_transaction_statuses_by_transaction_number(
        &self,
        transaction_number: String,
    ) -> Result<Vec<TransactionStatusEntity>>;
    async fn find_transaction_statuses_by_order_id(
        &self,
        order_id: String,
    ) -> Result<Vec<TransactionStatusEntity>>;

    async fn find_agreement_by_id(&self, id: Uuid) -> Result<Option<AgreementEntity>>;
    async fn find_agreements_by_agreement_ref(
        &self,
        agreement_ref: String,
    ) -> Result<Vec<AgreementEntity>>;

    async fn find_autopay_status_by_id(&self, id: Uuid) -> Result<Option<AutoPayStatusEntity>>;
    async fn find_autopay_statuses_by_transaction_number(
        &self,
        transaction_number: String,
    ) -> Result<Vec<AutoPayStatusEntity>>;
}
