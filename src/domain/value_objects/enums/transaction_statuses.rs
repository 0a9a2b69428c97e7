use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// `transactionStatus` codes reported by PayEx.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionStatusCode {
    Sale,
    Initialize,
    Credit,
    Authorize,
    Cancel,
    Failure,
    Capture,
}

impl TransactionStatusCode {
    pub fn as_code(&self) -> &'static str {
        match self {
            TransactionStatusCode::Sale => "0",
            TransactionStatusCode::Initialize => "1",
            TransactionStatusCode::Credit => "2",
            TransactionStatusCode::Authorize => "3",
            TransactionStatusCode::Cancel => "4",
            TransactionStatusCode::Failure => "5",
            TransactionStatusCode::Capture => "6",
        }
    }

    /// Sale and Authorize are the only outcomes that leave the merchant paid.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            TransactionStatusCode::Sale | TransactionStatusCode::Authorize
        )
    }
}

impl Display for TransactionStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            TransactionStatusCode::Sale => "sale",
            TransactionStatusCode::Initialize => "initialize",
            TransactionStatusCode::Credit => "credit",
            TransactionStatusCode::Authorize => "authorize",
            TransactionStatusCode::Cancel => "cancel",
            TransactionStatusCode::Failure => "failure",
            TransactionStatusCode::Capture => "capture",
        };
        write!(f, "{}", status)
    }
}

impl FromStr for TransactionStatusCode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "0" => Ok(TransactionStatusCode::Sale),
            "1" => Ok(TransactionStatusCode::Initialize),
            "2" => Ok(TransactionStatusCode::Credit),
            "3" => Ok(TransactionStatusCode::Authorize),
            "4" => Ok(TransactionStatusCode::Cancel),
            "5" => Ok(TransactionStatusCode::Failure),
            "6" => Ok(TransactionStatusCode::Capture),
            other => Err(format!("Unsupported transaction status: {}", other)),
        }
    }
}
