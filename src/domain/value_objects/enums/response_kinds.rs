use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    InitializedPayment,
    TransactionStatus,
    Agreement,
    AutoPayStatus,
}

impl Display for ResponseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            ResponseKind::InitializedPayment => "initialized_payment",
            ResponseKind::TransactionStatus => "transaction_status",
            ResponseKind::Agreement => "agreement",
            ResponseKind::AutoPayStatus => "autopay_status",
        };
        write!(f, "{}", kind)
    }
}
