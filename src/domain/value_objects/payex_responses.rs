use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    entities::{
        agreements::{AgreementEntity, InsertAgreementEntity},
        autopay_statuses::{AutoPayStatusEntity, InsertAutoPayStatusEntity},
        initialized_payments::{InitializedPaymentEntity, InsertInitializedPaymentEntity},
        payex_responses::{InsertPayexResponseEntity, PayexResponseEntity},
        transaction_statuses::{InsertTransactionStatusEntity, TransactionStatusEntity},
    },
    errors::ResponseStoreError,
    value_objects::{
        enums::{
            order_statuses::OrderStatus, response_kinds::ResponseKind,
            transaction_statuses::TransactionStatusCode,
        },
        response_status::{
            ERROR_DETAILS_KEY, ErrorDetails, ResponsePayload, ResponseStatus, STATUS_KEY,
            flag_value, normalize_key, text_value,
        },
    },
};

/// A typed record built from one kind of gateway response.
///
/// Each variant owns a compile-time table (`assign_field`) from lower-cased
/// gateway keys to its own fields. Keys missing from that table are dropped.
pub trait PayexResponse: Default + Send + Sync + Sized + 'static {
    const KIND: ResponseKind;

    fn id(&self) -> Option<Uuid>;
    fn status(&self) -> &ResponseStatus;
    fn status_mut(&mut self) -> &mut ResponseStatus;

    /// Returns `Ok(false)` when the variant has no field named `key`.
    fn assign_field(&mut self, key: &str, value: &Value) -> Result<bool, ResponseStoreError>;

    /// Only transaction statuses keep the `errorDetails` block.
    fn apply_error_details(&mut self, _details: ErrorDetails) {}

    fn to_insert_entity(&self) -> InsertPayexResponseEntity;
    fn from_entity(entity: PayexResponseEntity) -> Result<Self, ResponseStoreError>;
}

/// Builds a record of type `R` from a gateway payload without touching storage.
pub fn normalize_response<R: PayexResponse>(
    payload: &ResponsePayload,
) -> Result<R, ResponseStoreError> {
    let mut record = R::default();
    *record.status_mut() = ResponseStatus::with_raw_response(payload.clone());

    if let Some(block) = payload.get(STATUS_KEY) {
        record.status_mut().apply_status_block(block)?;
    }

    if let Some(block) = payload.get(ERROR_DETAILS_KEY) {
        record.apply_error_details(ErrorDetails::from_block(block)?);
    }

    for (key, value) in payload {
        if key == STATUS_KEY || key == ERROR_DETAILS_KEY {
            continue;
        }

        let field = normalize_key(key);
        let assigned =
            record.status_mut().assign_field(&field, value)? || record.assign_field(&field, value)?;
        if !assigned {
            debug!(kind = %R::KIND, key = %key, "dropping unmapped gateway field");
        }
    }

    Ok(record)
}

fn completed_successfully(status: &ResponseStatus, transaction_status: &str) -> bool {
    status.is_request_ok()
        && TransactionStatusCode::from_str(transaction_status)
            .map(|code| code.is_accepted())
            .unwrap_or(false)
}

fn restore_status(
    error_code: String,
    description: String,
    param_name: String,
    third_party_error: String,
    raw_response: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Result<ResponseStatus, ResponseStoreError> {
    let raw_response = match raw_response {
        Value::Object(map) => map,
        other => {
            return Err(ResponseStoreError::Persistence(anyhow!(
                "stored raw_response is not a mapping: {}",
                other
            )));
        }
    };

    let mut status = ResponseStatus::with_raw_response(raw_response);
    status.error_code = error_code;
    status.description = description;
    status.param_name = param_name;
    status.third_party_error = third_party_error;
    status.created_at = Some(created_at);
    status.updated_at = Some(updated_at);
    Ok(status)
}

fn unexpected_row(expected: ResponseKind, entity: &PayexResponseEntity) -> ResponseStoreError {
    ResponseStoreError::Persistence(anyhow!(
        "expected a {} row, storage returned a {} row",
        expected,
        entity.kind()
    ))
}

fn raw_value(status: &ResponseStatus) -> Value {
    Value::Object(status.raw_response().clone())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InitializedPaymentModel {
    pub id: Option<Uuid>,
    pub status: ResponseStatus,
    pub order_ref: String,
    pub redirect_url: String,
}

impl PayexResponse for InitializedPaymentModel {
    const KIND: ResponseKind = ResponseKind::InitializedPayment;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn status(&self) -> &ResponseStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ResponseStatus {
        &mut self.status
    }

    fn assign_field(&mut self, key: &str, value: &Value) -> Result<bool, ResponseStoreError> {
        match key {
            "orderref" => self.order_ref = text_value(key, value)?,
            "redirecturl" => self.redirect_url = text_value(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn to_insert_entity(&self) -> InsertPayexResponseEntity {
        InsertPayexResponseEntity::InitializedPayment(InsertInitializedPaymentEntity {
            error_code: self.status.error_code.clone(),
            description: self.status.description.clone(),
            param_name: self.status.param_name.clone(),
            third_party_error: self.status.third_party_error.clone(),
            raw_response: raw_value(&self.status),
            order_ref: self.order_ref.clone(),
            redirect_url: self.redirect_url.clone(),
        })
    }

    fn from_entity(entity: PayexResponseEntity) -> Result<Self, ResponseStoreError> {
        match entity {
            PayexResponseEntity::InitializedPayment(row) => Self::try_from(row),
            other => Err(unexpected_row(Self::KIND, &other)),
        }
    }
}

impl TryFrom<InitializedPaymentEntity> for InitializedPaymentModel {
    type Error = ResponseStoreError;

    fn try_from(row: InitializedPaymentEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(row.id),
            status: restore_status(
                row.error_code,
                row.description,
                row.param_name,
                row.third_party_error,
                row.raw_response,
                row.created_at,
                row.updated_at,
            )?,
            order_ref: row.order_ref,
            redirect_url: row.redirect_url,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionStatusModel {
    pub id: Option<Uuid>,
    pub status: ResponseStatus,
    pub transaction_status: String,
    pub transaction_number: String,
    pub order_id: String,
    pub product_id: String,
    pub payment_method: String,
    /// Minor currency units, as sent by the gateway.
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
    /// Set when the transaction tripped the gateway's fraud detection.
    pub fraud_data: bool,
    /// Set when the third party has not reported back yet.
    pub pending: bool,
    pub error_details: ErrorDetails,
}

impl TransactionStatusModel {
    pub fn is_completed_successfully(&self) -> bool {
        completed_successfully(&self.status, &self.transaction_status)
    }

    /// `amount` converted from minor units. Never fails, unusable input reads as zero.
    pub fn amount_as_decimal(&self) -> Decimal {
        self.amount
            .trim()
            .parse::<i64>()
            .map(|minor| Decimal::new(minor, 2))
            .unwrap_or_else(|_| Decimal::new(0, 2))
    }

    pub fn transaction_status_code(&self) -> Option<TransactionStatusCode> {
        TransactionStatusCode::from_str(&self.transaction_status).ok()
    }

    pub fn order_status_code(&self) -> Option<OrderStatus> {
        OrderStatus::from_str(&self.order_status).ok()
    }
}

impl PayexResponse for TransactionStatusModel {
    const KIND: ResponseKind = ResponseKind::TransactionStatus;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn status(&self) -> &ResponseStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ResponseStatus {
        &mut self.status
    }

    fn assign_field(&mut self, key: &str, value: &Value) -> Result<bool, ResponseStoreError> {
        match key {
            "transactionstatus" => self.transaction_status = text_value(key, value)?,
            "transactionnumber" => self.transaction_number = text_value(key, value)?,
            "orderid" => self.order_id = text_value(key, value)?,
            "productid" => self.product_id = text_value(key, value)?,
            "paymentmethod" => self.payment_method = text_value(key, value)?,
            "amount" => self.amount = text_value(key, value)?,
            "alreadycompleted" => self.already_completed = flag_value(key, value)?,
            "stopdate" => self.stop_date = text_value(key, value)?,
            "productnumber" => self.product_number = text_value(key, value)?,
            "clientgsmnumber" => self.client_gsm_number = text_value(key, value)?,
            "orderstatus" => self.order_status = text_value(key, value)?,
            "agreementref" => self.agreement_ref = text_value(key, value)?,
            "paymentmethodexpiredate" => self.payment_method_expire_date = text_value(key, value)?,
            "bankhash" => self.bank_hash = text_value(key, value)?,
            "maskednumber" => self.masked_number = text_value(key, value)?,
            "authenticatedstatus" => self.authenticated_status = text_value(key, value)?,
            "authenticatedwith" => self.authenticated_with = text_value(key, value)?,
            "frauddata" => self.fraud_data = flag_value(key, value)?,
            "pending" => self.pending = flag_value(key, value)?,
            _ => return self.error_details.assign_field(key, value),
        }
        Ok(true)
    }

    fn apply_error_details(&mut self, details: ErrorDetails) {
        self.error_details = details;
    }

    fn to_insert_entity(&self) -> InsertPayexResponseEntity {
        InsertPayexResponseEntity::TransactionStatus(InsertTransactionStatusEntity {
            error_code: self.status.error_code.clone(),
            description: self.status.description.clone(),
            param_name: self.status.param_name.clone(),
            third_party_error: self.status.third_party_error.clone(),
            raw_response: raw_value(&self.status),
            transaction_status: self.transaction_status.clone(),
            transaction_number: self.transaction_number.clone(),
            order_id: self.order_id.clone(),
            product_id: self.product_id.clone(),
            payment_method: self.payment_method.clone(),
            amount: self.amount.clone(),
            already_completed: self.already_completed,
            stop_date: self.stop_date.clone(),
            product_number: self.product_number.clone(),
            client_gsm_number: self.client_gsm_number.clone(),
            order_status: self.order_status.clone(),
            agreement_ref: self.agreement_ref.clone(),
            payment_method_expire_date: self.payment_method_expire_date.clone(),
            bank_hash: self.bank_hash.clone(),
            masked_number: self.masked_number.clone(),
            authenticated_status: self.authenticated_status.clone(),
            authenticated_with: self.authenticated_with.clone(),
            fraud_data: self.fraud_data,
            pending: self.pending,
            transaction_error_code: self.error_details.transaction_error_code.clone(),
            transaction_error_description: self
                .error_details
                .transaction_error_description
                .clone(),
            transaction_third_party_error: self
                .error_details
                .transaction_third_party_error
                .clone(),
        })
    }

    fn from_entity(entity: PayexResponseEntity) -> Result<Self, ResponseStoreError> {
        match entity {
            PayexResponseEntity::TransactionStatus(row) => Self::try_from(row),
            other => Err(unexpected_row(Self::KIND, &other)),
        }
    }
}

impl TryFrom<TransactionStatusEntity> for TransactionStatusModel {
    type Error = ResponseStoreError;

    fn try_from(row: TransactionStatusEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(row.id),
            status: restore_status(
                row.error_code,
                row.description,
                row.param_name,
                row.third_party_error,
                row.raw_response,
                row.created_at,
                row.updated_at,
            )?,
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
            error_details: ErrorDetails {
                transaction_error_code: row.transaction_error_code,
                transaction_error_description: row.transaction_error_description,
                transaction_third_party_error: row.transaction_third_party_error,
            },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgreementModel {
    pub id: Option<Uuid>,
    pub status: ResponseStatus,
    pub agreement_ref: String,
    /// Upper bound for any single transaction on this agreement.
    pub max_amount: String,
}

impl PayexResponse for AgreementModel {
    const KIND: ResponseKind = ResponseKind::Agreement;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn status(&self) -> &ResponseStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ResponseStatus {
        &mut self.status
    }

    fn assign_field(&mut self, key: &str, value: &Value) -> Result<bool, ResponseStoreError> {
        match key {
            "agreementref" => self.agreement_ref = text_value(key, value)?,
            "maxamount" => self.max_amount = text_value(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn to_insert_entity(&self) -> InsertPayexResponseEntity {
        InsertPayexResponseEntity::Agreement(InsertAgreementEntity {
            error_code: self.status.error_code.clone(),
            description: self.status.description.clone(),
            param_name: self.status.param_name.clone(),
            third_party_error: self.status.third_party_error.clone(),
            raw_response: raw_value(&self.status),
            agreement_ref: self.agreement_ref.clone(),
            max_amount: self.max_amount.clone(),
        })
    }

    fn from_entity(entity: PayexResponseEntity) -> Result<Self, ResponseStoreError> {
        match entity {
            PayexResponseEntity::Agreement(row) => Self::try_from(row),
            other => Err(unexpected_row(Self::KIND, &other)),
        }
    }
}

impl TryFrom<AgreementEntity> for AgreementModel {
    type Error = ResponseStoreError;

    fn try_from(row: AgreementEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(row.id),
            status: restore_status(
                row.error_code,
                row.description,
                row.param_name,
                row.third_party_error,
                row.raw_response,
                row.created_at,
                row.updated_at,
            )?,
            agreement_ref: row.agreement_ref,
            max_amount: row.max_amount,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutoPayStatusModel {
    pub id: Option<Uuid>,
    pub status: ResponseStatus,
    pub transaction_status: String,
    pub transaction_ref: String,
    pub transaction_number: String,
    pub payment_method: String,
}

impl AutoPayStatusModel {
    pub fn is_completed_successfully(&self) -> bool {
        completed_successfully(&self.status, &self.transaction_status)
    }
}

impl PayexResponse for AutoPayStatusModel {
    const KIND: ResponseKind = ResponseKind::AutoPayStatus;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn status(&self) -> &ResponseStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ResponseStatus {
        &mut self.status
    }

    fn assign_field(&mut self, key: &str, value: &Value) -> Result<bool, ResponseStoreError> {
        match key {
            "transactionstatus" => self.transaction_status = text_value(key, value)?,
            "transactionref" => self.transaction_ref = text_value(key, value)?,
            "transactionnumber" => self.transaction_number = text_value(key, value)?,
            "paymentmethod" => self.payment_method = text_value(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn to_insert_entity(&self) -> InsertPayexResponseEntity {
        InsertPayexResponseEntity::AutoPayStatus(InsertAutoPayStatusEntity {
            error_code: self.status.error_code.clone(),
            description: self.status.description.clone(),
            param_name: self.status.param_name.clone(),
            third_party_error: self.status.third_party_error.clone(),
            raw_response: raw_value(&self.status),
            transaction_status: self.transaction_status.clone(),
            transaction_ref: self.transaction_ref.clone(),
            transaction_number: self.transaction_number.clone(),
            payment_method: self.payment_method.clone(),
        })
    }

    fn from_entity(entity: PayexResponseEntity) -> Result<Self, ResponseStoreError> {
        match entity {
            PayexResponseEntity::AutoPayStatus(row) => Self::try_from(row),
            other => Err(unexpected_row(Self::KIND, &other)),
        }
    }
}

impl TryFrom<AutoPayStatusEntity> for AutoPayStatusModel {
    type Error = ResponseStoreError;

    fn try_from(row: AutoPayStatusEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(row.id),
            status: restore_status(
                row.error_code,
                row.description,
                row.param_name,
                row.third_party_error,
                row.raw_response,
                row.created_at,
                row.updated_at,
            )?,
            transaction_status: row.transaction_status,
            transaction_ref: row.transaction_ref,
            transaction_number: row.transaction_number,
            payment_method: row.payment_method,
        })
    }
}
