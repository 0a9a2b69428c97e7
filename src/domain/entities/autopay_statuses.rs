use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::autopay_statuses;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = autopay_statuses)]
pub struct AutoPayStatusEntity {
    pub id: Uuid,
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub transaction_status: String,
    pub transaction_ref: String,
    pub transaction_number: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = autopay_statuses)]
pub struct InsertAutoPayStatusEntity {
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub transaction_status: String,
    pub transaction_ref: String,
    pub transaction_number: String,
    pub payment_method: String,
}
