use anyhow::Result;
use async_trait::async_trait;
use diesel::{OptionalExtension, RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            agreements::AgreementEntity,
            autopay_statuses::AutoPayStatusEntity,
            initialized_payments::InitializedPaymentEntity,
            payex_responses::{InsertPayexResponseEntity, PayexResponseEntity},
            transaction_statuses::TransactionStatusEntity,
        },
        repositories::payex_responses::PayexResponseRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{agreements, autopay_statuses, initialized_payments, transaction_statuses},
    },
};

pub struct PayexResponsePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PayexResponsePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PayexResponseRepository for PayexResponsePostgres {
    async fn insert(&self, entity: InsertPayexResponseEntity) -> Result<PayexResponseEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = match entity {
            InsertPayexResponseEntity::InitializedPayment(row) => {
                PayexResponseEntity::InitializedPayment(
                    insert_into(initialized_payments::table)
                        .values(&row)
                        .returning(InitializedPaymentEntity::as_returning())
                        .get_result(&mut conn)?,
                )
            }
            InsertPayexResponseEntity::TransactionStatus(row) => {
                PayexResponseEntity::TransactionStatus(
                    insert_into(transaction_statuses::table)
                        .values(&row)
                        .returning(TransactionStatusEntity::as_returning())
                        .get_result(&mut conn)?,
                )
            }
            InsertPayexResponseEntity::Agreement(row) => PayexResponseEntity::Agreement(
                insert_into(agreements::table)
                    .values(&row)
                    .returning(AgreementEntity::as_returning())
                    .get_result(&mut conn)?,
            ),
            InsertPayexResponseEntity::AutoPayStatus(row) => PayexResponseEntity::AutoPayStatus(
                insert_into(autopay_statuses::table)
                    .values(&row)
                    .returning(AutoPayStatusEntity::as_returning())
                    .get_result(&mut conn)?,
            ),
        };

        Ok(result)
    }

    async fn find_initialized_payment_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<InitializedPaymentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = initialized_payments::table
            .find(id)
            .select(InitializedPaymentEntity::as_select())
            .first::<InitializedPaymentEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_initialized_payments_by_order_ref(
        &self,
        order_ref: String,
    ) -> Result<Vec<InitializedPaymentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = initialized_payments::table
            .filter(initialized_payments::order_ref.eq(order_ref))
            .order(initialized_payments::created_at.desc())
            .select(InitializedPaymentEntity::as_select())
            .load::<InitializedPaymentEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_transaction_status_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<TransactionStatusEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = transaction_statuses::table
            .find(id)
            .select(TransactionStatusEntity::as_select())
            .first::<TransactionStatusEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_transaction_statuses_by_transaction_number(
        &self,
        transaction_number: String,
    ) -> Result<Vec<TransactionStatusEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = transaction_statuses::table
            .filter(transaction_statuses::transaction_number.eq(transaction_number))
            .order(transaction_statuses::created_at.desc())
            .select(TransactionStatusEntity::as_select())
            .load::<TransactionStatusEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_transaction_statuses_by_order_id(
        &self,
        order_id: String,
    ) -> Result<Vec<TransactionStatusEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = transaction_statuses::table
            .filter(transaction_statuses::order_id.eq(order_id))
            .order(transaction_statuses::created_at.desc())
            .select(TransactionStatusEntity::as_select())
            .load::<TransactionStatusEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_agreement_by_id(&self, id: Uuid) -> Result<Option<AgreementEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = agreements::table
            .find(id)
            .select(AgreementEntity::as_select())
            .first::<AgreementEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_agreements_by_agreement_ref(
        &self,
        agreement_ref: String,
    ) -> Result<Vec<AgreementEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = agreements::table
            .filter(agreements::agreement_ref.eq(agreement_ref))
            .order(agreements::created_at.desc())
            .select(AgreementEntity::as_select())
            .load::<AgreementEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_autopay_status_by_id(&self, id: Uuid) -> Result<Option<AutoPayStatusEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = autopay_statuses::table
            .find(id)
            .select(AutoPayStatusEntity::as_select())
            .first::<AutoPayStatusEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_autopay_statuses_by_transaction_number(
        &self,
        transaction_number: String,
    ) -> Result<Vec<AutoPayStatusEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = autopay_statuses::table
            .filter(autopay_statuses::transaction_number.eq(transaction_number))
            .order(autopay_statuses::created_at.desc())
            .select(AutoPayStatusEntity::as_select())
            .load::<AutoPayStatusEntity>(&mut conn)?;

        Ok(result)
    }
}
