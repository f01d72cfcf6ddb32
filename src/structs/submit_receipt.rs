use serde::{Deserialize, Serialize};

/// Whatever the incident endpoint answered; only logged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub submitted: usize,
    pub body: serde_json::Value,
}
