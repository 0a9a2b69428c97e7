use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::initialized_payments;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = initialized_payments)]
pub struct InitializedPaymentEntity {
    pub id: Uuid,
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub order_ref: String,
    pub redirect_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = initialized_payments)]
pub struct InsertInitializedPaymentEntity {
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub order_ref: String,
    pub redirect_url: String,
}
