pub mod agreements;
pub mod autopay_statuses;
pub mod initialized_payments;
pub mod payex_responses;
pub mod transaction_statuses;
