use std::sync::Arc;

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::{
    errors::ResponseStoreError,
    repositories::payex_responses::PayexResponseRepository,
    value_objects::{
        payex_responses::{
            AgreementModel, AutoPayStatusModel, InitializedPaymentModel, PayexResponse,
            TransactionStatusModel, normalize_response,
        },
        response_status::ResponsePayload,
    },
};

pub struct ResponseStoreUseCase {
    repository: Arc<dyn PayexResponseRepository + Send + Sync>,
}

impl ResponseStoreUseCase {
    pub fn new(repository: Arc<dyn PayexResponseRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Normalizes `payload` into an `R` record. With `commit` the record is
    /// inserted and returned with its id and timestamps; without it storage
    /// is never touched.
    pub async fn normalize_and_persist<R: PayexResponse>(
        &self,
        payload: &ResponsePayload,
        commit: bool,
    ) -> Result<R, ResponseStoreError> {
        let record = normalize_response::<R>(payload).inspect_err(|err| {
            error!(kind = %R::KIND, error = %err, payload = ?payload, "response_store: normalization failed");
        })?;

        if !commit {
            debug!(kind = %R::KIND, "response_store: normalized without commit");
            return Ok(record);
        }

        let row = self
            .repository
            .insert(record.to_insert_entity())
            .await
            .map_err(|err| {
                error!(kind = %R::KIND, error = ?err, "response_store: insert failed");
                ResponseStoreError::Persistence(err)
            })?;

        let stored = R::from_entity(row)?;
        info!(
            kind = %R::KIND,
            id = ?stored.id(),
            error_code = %stored.status().error_code,
            "response_store: gateway response stored"
        );
        Ok(stored)
    }

    pub async fn find_initialized_payment(
        &self,
        id: Uuid,
    ) -> Result<Option<InitializedPaymentModel>, ResponseStoreError> {
        self.repository
            .find_initialized_payment_by_id(id)
            .await
            .map_err(ResponseStoreError::Persistence)?
            .map(InitializedPaymentModel::try_from)
            .transpose()
    }

    pub async fn find_initialized_payments_by_order_ref(
        &self,
        order_ref: &str,
    ) -> Result<Vec<InitializedPaymentModel>, ResponseStoreError> {
        self.repository
            .find_initialized_payments_by_order_ref(order_ref.to_string())
            .await
            .map_err(ResponseStoreError::Persistence)?
            .into_iter()
            .map(InitializedPaymentModel::try_from)
            .collect()
    }

    pub async fn find_transaction_status(
        &self,
        id: Uuid,
    ) -> Result<Option<TransactionStatusModel>, ResponseStoreError> {
        self.repository
            .find_transaction_status_by_id(id)
            .await
            .map_err(ResponseStoreError::Persistence)?
            .map(TransactionStatusModel::try_from)
            .transpose()
    }

    pub async fn find_transaction_statuses_by_transaction_number(
        &self,
        transaction_number: &str,
    ) -> Result<Vec<TransactionStatusModel>, ResponseStoreError> {
        self.repository
            .find_transaction_statuses_by_transaction_number(transaction_number.to_string())
            .await
            .map_err(ResponseStoreError::Persistence)?
            .into_iter()
            .map(TransactionStatusModel::try_from)
            .collect()
    }

    pub async fn find_transaction_statuses_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Vec<TransactionStatusModel>, ResponseStoreError> {
        self.repository
            .find_transaction_statuses_by_order_id(order_id.to_string())
            .await
            .map_err(ResponseStoreError::Persistence)?
            .into_iter()
            .map(TransactionStatusModel::try_from)
            .collect()
    }

    pub async fn find_agreement(
        &self,
        id: Uuid,
    ) -> Result<Option<AgreementModel>, ResponseStoreError> {
        self.repository
            .find_agreement_by_id(id)
            .await
            .map_err(ResponseStoreError::Persistence)?
            .map(AgreementModel::try_from)
            .transpose()
    }

    pub async fn find_agreements_by_agreement_ref(
        &self,
        agreement_ref: &str,
    ) -> Result<Vec<AgreementModel>, ResponseStoreError> {
        self.repository
            .find_agreements_by_agreement_ref(agreement_ref.to_string())
            .await
            .map_err(ResponseStoreError::Persistence)?
            .into_iter()
            .map(AgreementModel::try_from)
            .collect()
    }

    pub async fn find_autopay_status(
        &self,
        id: Uuid,
    ) -> Result<Option<AutoPayStatusModel>, ResponseStoreError> {
        self.repository
            .find_autopay_status_by_id(id)
            .await
            .map_err(ResponseStoreError::Persistence)?
            .map(AutoPayStatusModel::try_from)
            .transpose()
    }

    pub async fn find_autopay_statuses_by_transaction_number(
        &self,
        transaction_number: &str,
    ) -> Result<Vec<AutoPayStatusModel>, ResponseStoreError> {
        self.repository
            .find_autopay_statuses_by_transaction_number(transaction_number.to_string())
            .await
            .map_err(ResponseStoreError::Persistence)?
            .into_iter()
            .map(AutoPayStatusModel::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::usecases::test_support::{payload, stored_row},
        domain::{
            entities::{
                agreements::AgreementEntity, payex_responses::InsertPayexResponseEntity,
            },
            repositories::payex_responses::MockPayexResponseRepository,
        },
    };
    use anyhow::anyhow;
    use chrono::Utc;
    use mockall::predicate::eq;
    use serde_json::json;

    fn initialized_payment_payload() -> ResponsePayload {
        payload(json!({
            "status": {
                "errorCode": "OK",
                "code": "OK",
                "description": "OK",
                "thirdPartyError": null,
                "paramName": null
            },
            "header": {
                "date": "2011-10-07 12:35:34",
                "name": "Payex Header v1.0",
                "id": "a3a2da2c9cdd4aebbcaa6b609df6fd52"
            },
            "sessionRef": "5996a5a093af4820a8c5755a73e6e76b",
            "redirectUrl": "https://test-account.payex.com/MiscUI/PxMenu.aspx?orderRef=c59cc7c7cc0c4194b1e21c27d6ba4074",
            "orderRef": "c59cc7c7cc0c4194b1e21c27d6ba4074"
        }))
    }

    #[tokio::test]
    async fn dry_run_never_touches_storage() {
        let mut repository = MockPayexResponseRepository::new();
        repository.expect_insert().times(0);

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        let record = usecase
            .normalize_and_persist::<InitializedPaymentModel>(&initialized_payment_payload(), false)
            .await
            .unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.status.created_at, None);
        assert_eq!(record.status.updated_at, None);
        assert_eq!(record.order_ref, "c59cc7c7cc0c4194b1e21c27d6ba4074");
    }

    #[tokio::test]
    async fn commit_inserts_exactly_once() {
        let response = initialized_payment_payload();

        let mut repository = MockPayexResponseRepository::new();
        repository
            .expect_insert()
            .withf(|entity| matches!(entity, InsertPayexResponseEntity::InitializedPayment(_)))
            .times(1)
            .returning(|entity| Ok(stored_row(entity)));

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        let record = usecase
            .normalize_and_persist::<InitializedPaymentModel>(&response, true)
            .await
            .unwrap();

        assert!(record.id.is_some());
        assert!(record.status.created_at.is_some());
        assert!(record.status.updated_at.is_some());
        assert_eq!(record.status.raw_response(), &response);
        assert_eq!(record.status.error_code, "OK");
        assert_eq!(
            record.redirect_url,
            "https://test-account.payex.com/MiscUI/PxMenu.aspx?orderRef=c59cc7c7cc0c4194b1e21c27d6ba4074"
        );
    }

    #[tokio::test]
    async fn committed_autopay_status_keeps_derived_queries() {
        let response = payload(json!({
            "status": {
                "errorCode": "OK",
                "code": "OK",
                "description": "OK",
                "thirdPartyError": null,
                "paramName": null
            },
            "transactionNumber": "041029056",
            "transactionRef": "b23a5779df944b0dae745065dd1804f2",
            "paymentMethod": "VISA",
            "transactionStatus": "0"
        }));

        let mut repository = MockPayexResponseRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|entity| Ok(stored_row(entity)));

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        let record = usecase
            .normalize_and_persist::<AutoPayStatusModel>(&response, true)
            .await
            .unwrap();

        assert_eq!(record.transaction_number, "041029056");
        assert!(record.is_completed_successfully());
    }

    #[tokio::test]
    async fn malformed_payload_is_not_persisted() {
        let mut repository = MockPayexResponseRepository::new();
        repository.expect_insert().times(0);

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        let err = usecase
            .normalize_and_persist::<TransactionStatusModel>(
                &payload(json!({ "status": ["OK"] })),
                true,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ResponseStoreError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_persistence_error() {
        let mut repository = MockPayexResponseRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|_| Err(anyhow!("connection refused")));

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        let err = usecase
            .normalize_and_persist::<InitializedPaymentModel>(&initialized_payment_payload(), true)
            .await
            .unwrap_err();

        assert!(matches!(err, ResponseStoreError::Persistence(_)));
    }

    #[tokio::test]
    async fn nul_character_is_stored_unsanitized_and_rejection_is_persistence() {
        let mut response = initialized_payment_payload();
        response.insert("orderRef".to_string(), json!("c59cc7c7\u{0}cc0c"));

        let mut repository = MockPayexResponseRepository::new();
        repository
            .expect_insert()
            .withf(|entity| match entity {
                InsertPayexResponseEntity::InitializedPayment(row) => {
                    row.order_ref == "c59cc7c7\u{0}cc0c"
                        && row.raw_response["orderRef"] == json!("c59cc7c7\u{0}cc0c")
                }
                _ => false,
            })
            .times(1)
            .returning(|_| Err(anyhow!("unsupported Unicode escape sequence")));

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        let err = usecase
            .normalize_and_persist::<InitializedPaymentModel>(&response, true)
            .await
            .unwrap_err();

        assert!(matches!(err, ResponseStoreError::Persistence(_)));
    }

    #[tokio::test]
    async fn agreements_are_found_by_reference() {
        let now = Utc::now();
        let row = AgreementEntity {
            id: Uuid::new_v4(),
            error_code: "OK".to_string(),
            description: "OK".to_string(),
            param_name: String::new(),
            third_party_error: String::new(),
            raw_response: json!({ "agreementRef": "agr-1" }),
            agreement_ref: "agr-1".to_string(),
            max_amount: "100000".to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut repository = MockPayexResponseRepository::new();
        repository
            .expect_find_agreements_by_agreement_ref()
            .with(eq("agr-1".to_string()))
            .times(1)
            .returning(move |_| Ok(vec![row.clone()]));

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        let agreements = usecase
            .find_agreements_by_agreement_ref("agr-1")
            .await
            .unwrap();

        assert_eq!(agreements.len(), 1);
        assert_eq!(agreements[0].max_amount, "100000");
        assert_eq!(agreements[0].status.created_at, Some(now));
    }

    #[tokio::test]
    async fn missing_transaction_status_is_none() {
        let id = Uuid::new_v4();

        let mut repository = MockPayexResponseRepository::new();
        repository
            .expect_find_transaction_status_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let usecase = ResponseStoreUseCase::new(Arc::new(repository));
        assert!(usecase.find_transaction_status(id).await.unwrap().is_none());
    }
}
