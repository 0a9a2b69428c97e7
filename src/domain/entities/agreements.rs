use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::agreements;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = agreements)]
pub struct AgreementEntity {
    pub id: Uuid,
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub agreement_ref: String,
    pub max_amount: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = agreements)]
pub struct InsertAgreementEntity {
    pub error_code: String,
    pub description: String,
    pub param_name: String,
    pub third_party_error: String,
    pub raw_response: serde_json::Value,
    pub agreement_ref: String,
    pub max_amount: String,
}
