//! Wallet domain types
//!
//! Transactions as returned by `GET /api/transactions`. Amounts are signed:
//! credits positive, debits negative. The wire names for transaction kinds
//! are the backend's Portuguese identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of wallet movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "deposito")]
    Deposit,
    #[serde(rename = "transferencia")]
    Transfer,
    #[serde(rename = "pix")]
    Pix,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Transfer => "Transfer",
            TransactionKind::Pix => "PIX",
        }
    }
}

/// A single wallet movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub cashback: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Credits render with a leading `+`; debits carry their own sign.
    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": "t1",
            "tipo": "pix",
            "descricao": "PIX recebido",
            "valor": 250.0,
            "status": "concluido",
            "cashback": 2.5,
            "created_at": "2025-06-01T14:30:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Pix);
        assert_eq!(tx.amount, 250.0);
        assert_eq!(tx.cashback, Some(2.5));
        assert!(tx.is_credit());
    }

    #[test]
    fn cashback_defaults_to_none() {
        let json = r#"{
            "id": "t2",
            "tipo": "transferencia",
            "descricao": "Aluguel",
            "valor": -1200.0,
            "status": "concluido",
            "created_at": "2025-06-02T09:00:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.cashback, None);
        assert!(!tx.is_credit());
    }

    #[test]
    fn kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Deposit).unwrap(),
            "\"deposito\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Transfer).unwrap(),
            "\"transferencia\""
        );
    }
}
