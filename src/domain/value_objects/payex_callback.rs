use serde::Serialize;
use std::fmt::Display;

/// Form fields PayEx posts when a transaction status changes:
/// `transactionRef=<32 hex>&transactionNumber=<8 digits>[&orderRef=<32 hex>]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayexCallbackForm {
    pub order_ref: Option<String>,
    pub transaction_ref: Option<String>,
    pub transaction_number: Option<String>,
}

impl PayexCallbackForm {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "orderRef" => form.order_ref = Some(value.into()),
                "transactionRef" => form.transaction_ref = Some(value.into()),
                "transactionNumber" => form.transaction_number = Some(value.into()),
                _ => {}
            }
        }
        form
    }

    /// An empty `orderRef` counts as missing.
    pub fn order_ref(&self) -> Option<&str> {
        self.order_ref.as_deref().filter(|order_ref| !order_ref.is_empty())
    }
}

/// Body sent back to PayEx. The gateway keys its retries off this text, not
/// off the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallbackOutcome {
    Ok,
    Failure,
}

impl CallbackOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackOutcome::Ok => "OK",
            CallbackOutcome::Failure => "FAILURE",
        }
    }
}

impl Display for CallbackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_are_picked_up() {
        let form = PayexCallbackForm::from_pairs([
            ("transactionRef", "123"),
            ("transactionNumber", "456"),
            ("orderRef", "abc123"),
            ("unexpected", "ignored"),
        ]);

        assert_eq!(form.order_ref(), Some("abc123"));
        assert_eq!(form.transaction_ref.as_deref(), Some("123"));
        assert_eq!(form.transaction_number.as_deref(), Some("456"));
    }

    #[test]
    fn empty_order_ref_counts_as_missing() {
        let form = PayexCallbackForm::from_pairs([("orderRef", "")]);
        assert_eq!(form.order_ref(), None);

        let form = PayexCallbackForm::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(form.order_ref(), None);
    }

    #[test]
    fn outcome_bodies_match_gateway_contract() {
        assert_eq!(CallbackOutcome::Ok.to_string(), "OK");
        assert_eq!(CallbackOutcome::Failure.to_string(), "FAILURE");
    }
}
