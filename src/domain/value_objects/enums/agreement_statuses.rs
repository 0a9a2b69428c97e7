use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// `agreementStatus` codes returned by `check_agreement`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgreementStatus {
    NotVerified,
    Verified,
    Deleted,
}

impl Display for AgreementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let agreement_status = match self {
            AgreementStatus::NotVerified => "not_verified",
            AgreementStatus::Verified => "verified",
            AgreementStatus::Deleted => "deleted",
        };
        write!(f, "{}", agreement_status)
    }
}

impl FromStr for AgreementStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "0" => Ok(AgreementStatus::NotVerified),
            "1" => Ok(AgreementStatus::Verified),
            "2" => Ok(AgreementStatus::Deleted),
            other => Err(format!("Unsupported agreement status: {}", other)),
        }
    }
}
