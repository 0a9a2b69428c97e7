use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::transaction_statuses;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = transaction_statuses)]
pub struct TransactionStatusEntity {
    pub id: Uuid,
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub transaction_status: String,
    pub transaction_number: String,
    pub order_id: String,
    pub product_id: String,
    pub payment_method: String,
    pub amount: String,
    pub already_completed: bool,
    pub stop_date: String,
    pub product_number: String,
    pub client_gsm_number: String,
    pub order_status: String,
    pub agreement_ref: String,
    pub payment_method_expire_date: String,
    pub bank_hash: String,
    pub masked_number: String,
    pub authenticated_status: String,
    pub authenticated_with: String,
    pub fraud_data: bool,
    pub pending: bool,
    pub transaction_error_code: String,
    pub transaction_error_description: String,
    pub transaction_third_party_error: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = transaction_statuses)]
pub struct InsertTransactionStatusEntity {
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub transaction_status: String,
    pub transaction_number: String,
    pub order_id: String,
    pub product_id: String,
    pub payment_method: String,
    pub amount: String,
    pub already_completed: bool,
    pub stop_date: String,
    pub product_number: String,
    pub client_gsm_number: String,
    pub order_status: String,
    pub agreement_ref: String,
    pub payment_method_expire_date: String,
    pub bank_hash: String,
    pub masked_number: String,
    pub authenticated_status: String,
    pub authenticated_with: String,
    pub fraud_data: bool,
    pub pending: bool,
    pub transaction_error_code: String,
    pub transaction_error_description: String,
    pub transaction_third_party_error: String,
}
