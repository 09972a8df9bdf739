use num::BigUint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use super::Transaction;

/// A single inferred movement of one asset between two parties.
///
/// `value_usd`, `method_id`, `is_transfer`, `fee`, `is_added`, `is_removed`
/// and `portfolio_id` are reserved for downstream consumers and always carry
/// their default value here.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTransfer {
    pub hash: String,
    pub block_number: u32,
    pub wallet: String,
    /// Contract address of the asset moved, empty for ALPH.
    pub contract: String,
    pub timestamp: u64,
    pub from: String,
    pub to: String,
    #[serde_as(as = "DisplayFromStr")]
    pub tx_cost: Decimal,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: BigUint,
    pub value_usd: f64,
    pub method_id: String,
    pub is_out: bool,
    pub is_transfer: bool,
    pub fee: u64,
    pub is_added: bool,
    pub is_removed: bool,
    pub portfolio_id: u64,
}

/// Fields shared by every record emitted for one transaction.
#[derive(Debug, Clone)]
pub struct TransferContext<'a> {
    pub hash: &'a str,
    pub block_number: u32,
    pub wallet: &'a str,
    pub timestamp: u64,
    pub tx_cost: Decimal,
}

impl<'a> TransferContext<'a> {
    pub fn new(tx: &'a Transaction, wallet: &'a str, block_number: u32) -> Self {
        Self {
            hash: &tx.hash,
            block_number,
            wallet,
            timestamp: tx.timestamp,
            tx_cost: tx.tx_cost(),
        }
    }

    pub fn record(
        &self,
        contract: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: BigUint,
        is_out: bool,
    ) -> NormalizedTransfer {
        NormalizedTransfer {
            hash: self.hash.to_string(),
            block_number: self.block_number,
            wallet: self.wallet.to_string(),
            contract: contract.into(),
            timestamp: self.timestamp,
            from: from.into(),
            to: to.into(),
            tx_cost: self.tx_cost,
            amount,
            value_usd: 0.0,
            method_id: String::new(),
            is_out,
            is_transfer: false,
            fee: 0,
            is_added: false,
            is_removed: false,
            portfolio_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_serialize_field_set() {
        let record = NormalizedTransfer {
            hash: "h".into(),
            block_number: 42,
            wallet: "w".into(),
            contract: String::new(),
            timestamp: 1_700_000_000_000,
            from: "w".into(),
            to: "r".into(),
            tx_cost: dec!(0.002),
            amount: BigUint::from(10u64).pow(30),
            value_usd: 0.0,
            method_id: String::new(),
            is_out: true,
            is_transfer: false,
            fee: 0,
            is_added: false,
            is_removed: false,
            portfolio_id: 0,
        };

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys = obj.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "amount",
                "block_number",
                "contract",
                "fee",
                "from",
                "hash",
                "is_added",
                "is_out",
                "is_removed",
                "is_transfer",
                "method_id",
                "portfolio_id",
                "timestamp",
                "to",
                "tx_cost",
                "value_usd",
                "wallet",
            ]
        );
        assert_eq!(obj["amount"], "1000000000000000000000000000000");
        assert_eq!(obj["tx_cost"], "0.002");

        let back: NormalizedTransfer = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
