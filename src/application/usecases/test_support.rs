use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    entities::{
        agreements::AgreementEntity,
        autopay_statuses::AutoPayStatusEntity,
        initialized_payments::InitializedPaymentEntity,
        payex_responses::{InsertPayexResponseEntity, PayexResponseEntity},
        transaction_statuses::TransactionStatusEntity,
    },
    value_objects::response_status::ResponsePayload,
};

pub(crate) fn payload(value: Value) -> ResponsePayload {
    match value {
        Value::Object(map) => map,
        other => panic!("test payload must be an object, got {other}"),
    }
}

/// What Postgres hands back for an insert: fresh id, both timestamps set to now.
pub(crate) fn stored_row(entity: InsertPayexResponseEntity) -> PayexResponseEntity {
    let id = Uuid::new_v4();
    let now = Utc::now();

    match entity {
        InsertPayexResponseEntity::InitializedPayment(row) => {
            PayexResponseEntity::InitializedPayment(InitializedPaymentEntity {
                id,
                error_code: row.error_code,
                description: row.description,
                param_name: row.param_name,
                third_party_error: row.third_party_error,
                raw_response: row.raw_response,
                order_ref: row.order_ref,
                redirect_url: row.redirect_url,
                created_at: now,
                updated_at: now,
            })
        }
        InsertPayexResponseEntity::TransactionStatus(row) => {
            PayexResponseEntity::TransactionStatus(TransactionStatusEntity {
                id,
                error_code: row.error_code,
                description: row.description,
                param_name: row.param_name,
                third_party_error: row.third_party_error,
                raw_response: row.raw_response,
                transaction_status: row.transaction_status,
                transaction_number: row.transaction_number,
                order_id: row.order_id,
                product_id: row.product_id,
                payment_method: row.payment_method,
                amount: row.amount,
                already_completed: row.already_completed,
                stop_date: row.stop_date,
                product_number: row.product_number,
                client_gsm_number: row.client_gsm_number,
                order_status: row.order_status,
                agreement_ref: row.agreement_ref,
                payment_method_expire_date: row.payment_method_expire_date,
                bank_hash: row.bank_hash,
                masked_number: row.masked_number,
                authenticated_status: row.authenticated_status,
                authenticated_with: row.authenticated_with,
                fraud_data: row.fraud_data,
                pending: row.pending,
                transaction_error_code: row.transaction_error_code,
                transaction_error_description: row.transaction_error_description,
                transaction_third_party_error: row.transaction_third_party_error,
                created_at: now,
                updated_at: now,
            })
        }
        InsertPayexResponseEntity::Agreement(row) => PayexResponseEntity::Agreement(AgreementEntity {
            id,
            error_code: row.error_code,
            description: row.description,
            param_name: row.param_name,
            third_party_error: row.third_party_error,
            raw_response: row.raw_response,
            agreement_ref: row.agreement_ref,
            max_amount: row.max_amount,
            created_at: now,
            updated_at: now,
        }),
        InsertPayexResponseEntity::AutoPayStatus(row) => {
            PayexResponseEntity::AutoPayStatus(AutoPayStatusEntity {
                id,
                error_code: row.error_code,
                description: row.description,
                param_name: row.param_name,
                third_party_error: row.third_party_error,
                raw_response: row.raw_response,
                transaction_status: row.transaction_status,
                transaction_ref: row.transaction_ref,
                transaction_number: row.transaction_number,
                payment_method: row.payment_method,
                created_at: now,
                updated_at: now,
            })
        }
    }
}
