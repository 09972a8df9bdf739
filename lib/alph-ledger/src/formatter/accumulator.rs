use indexmap::IndexMap;
use num::{BigUint, Zero};

use crate::model::{NormalizedTransfer, TransferContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLeg {
    pub from: String,
    pub to: String,
    pub amount: BigUint,
}

/// Sums legs that move the same asset, keyed by the asset's contract address.
/// Records come out in the order their contract address was first seen.
#[derive(Debug, Default)]
pub struct TransferAccumulator {
    legs: IndexMap<String, TransferLeg>,
}

impl TransferAccumulator {
    /// Adds `amount` to the leg of `contract`. The first leg seen for a
    /// contract fixes its `from`/`to`.
    pub fn add(&mut self, contract: String, from: &str, to: &str, amount: &BigUint) {
        self.legs
            .entry(contract)
            .and_modify(|leg| leg.amount += amount)
            .or_insert_with(|| TransferLeg {
                from: from.to_string(),
                to: to.to_string(),
                amount: amount.clone(),
            });
    }

    pub fn get(&self, contract: &str) -> Option<&TransferLeg> {
        self.legs.get(contract)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Emits one record per contract, skipping legs that summed to zero.
    pub fn into_records<'c>(
        self,
        ctx: &'c TransferContext<'c>,
        is_out: bool,
    ) -> impl Iterator<Item = NormalizedTransfer> + 'c {
        self.legs
            .into_iter()
            .filter(|(_, leg)| !leg.amount.is_zero())
            .map(move |(contract, leg)| ctx.record(contract, leg.from, leg.to, leg.amount, is_out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregates_by_contract() {
        let mut acc = TransferAccumulator::default();
        acc.add("b".into(), "w", "pool", &BigUint::from(30u32));
        acc.add("a".into(), "w", "pool", &BigUint::from(5u32));
        acc.add("b".into(), "other", "elsewhere", &BigUint::from(70u32));

        assert_eq!(acc.len(), 2);
        assert_eq!(
            acc.get("b"),
            Some(&TransferLeg {
                from: "w".into(),
                to: "pool".into(),
                amount: BigUint::from(100u32),
            })
        );
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let tx = crate::model::Transaction::from(crate::model::RawTransaction {
            hash: "tx".into(),
            ..Default::default()
        });
        let ctx = TransferContext::new(&tx, "w", 1);

        let mut acc = TransferAccumulator::default();
        acc.add("z".into(), "w", "pool", &BigUint::from(1u32));
        acc.add("empty".into(), "w", "pool", &BigUint::zero());
        acc.add("a".into(), "w", "pool", &BigUint::from(2u32));

        let contracts = acc
            .into_records(&ctx, true)
            .map(|record| record.contract)
            .collect::<Vec<_>>();
        assert_eq!(contracts, ["z", "a"]);
    }
}
