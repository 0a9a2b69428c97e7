use crate::domain::value_objects::enums::response_kinds::ResponseKind;

use super::{
    agreements::{AgreementEntity, InsertAgreementEntity},
    autopay_statuses::{AutoPayStatusEntity, InsertAutoPayStatusEntity},
    initialized_payments::{InitializedPaymentEntity, InsertInitializedPaymentEntity},
    transaction_statuses::{InsertTransactionStatusEntity, TransactionStatusEntity},
};

/// A row ready to be written to one of the four response tables.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertPayexResponseEntity {
    InitializedPayment(InsertInitializedPaymentEntity),
    TransactionStatus(InsertTransactionStatusEntity),
    Agreement(InsertAgreementEntity),
    AutoPayStatus(InsertAutoPayStatusEntity),
}

/// A row read back from one of the four response tables.
#[derive(Debug, Clone)]
pub enum PayexResponseEntity {
    InitializedPayment(InitializedPaymentEntity),
    TransactionStatus(TransactionStatusEntity),
    Agreement(AgreementEntity),
    AutoPayStatus(AutoPayStatusEntity),
}

impl PayexResponseEntity {
    pub fn kind(&self) -> ResponseKind {
        match self {
            PayexResponseEntity::InitializedPayment(_) => ResponseKind::InitializedPayment,
            PayexResponseEntity::TransactionStatus(_) => ResponseKind::TransactionStatus,
            PayexResponseEntity::Agreement(_) => ResponseKind::Agreement,
            PayexResponseEntity::AutoPayStatus(_) => ResponseKind::AutoPayStatus,
        }
    }
}
