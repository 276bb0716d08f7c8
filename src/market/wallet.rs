use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Amounts are virtual Indonesian Rupiah.
pub type Rupiah = i64;

/// Classifies a ledger entry. Deposits and earnings carry positive amounts,
/// payments negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Deposit,
    Earning,
    Payment,
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxKind::Deposit => write!(f, "DEPOSIT"),
            TxKind::Earning => write!(f, "EARNING"),
            TxKind::Payment => write!(f, "PAYMENT"),
        }
    }
}

/// A single immutable ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TxKind,
    pub amount: Rupiah,
    pub date: DateTime<Utc>,
    pub description: String,
}

/// A virtual wallet: a balance plus its append-only transaction history,
/// newest entry first.
///
/// Invariant: `balance` always equals the sum of all transaction amounts.
/// [`Wallet::record`] is the only mutation path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    balance: Rupiah,
    transactions: VecDeque<Transaction>,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Rupiah {
        self.balance
    }

    /// Ledger entries, newest first.
    pub fn transactions(&self) -> &VecDeque<Transaction> {
        &self.transactions
    }

    /// Applies a signed transaction: updates the balance and prepends the
    /// entry to the history. The amount's sign must match the kind.
    pub fn record(
        &mut self,
        kind: TxKind,
        amount: Rupiah,
        description: impl Into<String>,
    ) -> &Transaction {
        debug_assert!(
            match kind {
                TxKind::Deposit | TxKind::Earning => amount > 0,
                TxKind::Payment => amount < 0,
            },
            "transaction amount sign does not match kind {kind}"
        );

        self.balance += amount;
        self.transactions.push_front(Transaction {
            id: Uuid::new_v4(),
            kind,
            amount,
            date: Utc::now(),
            description: description.into(),
        });
        &self.transactions[0]
    }

    /// Sum of all recorded amounts. Equals `balance()` at all times.
    pub fn ledger_total(&self) -> Rupiah {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.balance == self.ledger_total()
    }
}
