use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// `orderStatus` codes. `Completed` only means the customer finished the flow,
/// the transaction status still decides whether it was paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Processing,
    NotFound,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let order_status = match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Processing => "processing",
            OrderStatus::NotFound => "not_found",
        };
        write!(f, "{}", order_status)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "0" => Ok(OrderStatus::Completed),
            "1" => Ok(OrderStatus::Processing),
            "2" => Ok(OrderStatus::NotFound),
            other => Err(format!("Unsupported order status: {}", other)),
        }
    }
}
