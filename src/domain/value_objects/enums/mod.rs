pub mod agreement_statuses;
pub mod order_statuses;
pub mod response_kinds;
pub mod transaction_statuses;
