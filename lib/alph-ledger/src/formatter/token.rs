use indexmap::IndexSet;
use num::Zero;

use crate::{
    address::contract_address,
    model::{NormalizedTransfer, Transaction, TransferContext},
};

/// Direct token transfer between two parties, one record per token id that
/// can be matched to an input spending it and an output in another spend
/// group receiving it. Unmatched ids are skipped.
pub fn format(tx: &Transaction, wallet: &str, block_number: u32) -> Vec<NormalizedTransfer> {
    let ctx = TransferContext::new(tx, wallet, block_number);

    let token_ids = tx
        .inputs
        .iter()
        .flat_map(|input| input.tokens.iter().map(|token| token.id.as_str()))
        .collect::<IndexSet<_>>();

    token_ids
        .into_iter()
        .filter_map(|id| {
            let input = tx
                .inputs
                .iter()
                .find(|input| input.token_amount(id).is_some())?;
            let (output, amount) = tx
                .outputs
                .iter()
                .filter(|output| output.hint_differs(input.hint))
                .find_map(|output| output.token_amount(id).map(|amount| (output, amount)))?;

            // an unreadable token amount falls back to the ALPH carried alongside it
            let amount = if amount.is_zero() {
                &output.atto_alph_amount
            } else {
                amount
            };

            Some(ctx.record(
                contract_address(id),
                &input.address,
                &output.address,
                amount.clone(),
                input.address == wallet,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::fixtures::*;

    #[test]
    fn test_one_record_per_matched_token() {
        let tx = transaction(
            vec![
                input(1, WALLET, 100, &[(TOKEN_A, 50)], true),
                input(1, WALLET, 100, &[(TOKEN_B, 8), (TOKEN_A, 5)], true),
            ],
            vec![
                output(2, OTHER, 1, &[(TOKEN_A, 40)]),
                output(2, OTHER, 1, &[(TOKEN_B, 8)]),
                output(1, WALLET, 190, &[(TOKEN_A, 15)]),
            ],
        );

        let records = format(&tx, WALLET, 77);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].contract, contract_address(TOKEN_A));
        assert_eq!(records[0].from, WALLET);
        assert_eq!(records[0].to, OTHER);
        assert_eq!(records[0].amount, amount(40));
        assert!(records[0].is_out);

        assert_eq!(records[1].contract, contract_address(TOKEN_B));
        assert_eq!(records[1].amount, amount(8));
    }

    #[test]
    fn test_incoming_token() {
        let tx = transaction(
            vec![input(4, OTHER, 100, &[(TOKEN_A, 50)], true)],
            vec![output(9, WALLET, 1, &[(TOKEN_A, 50)]), output(4, OTHER, 98, &[])],
        );

        let records = format(&tx, WALLET, 1);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_out);
        assert_eq!(records[0].from, OTHER);
        assert_eq!(records[0].to, WALLET);
    }

    #[test]
    fn test_unmatched_token_is_skipped() {
        // token only returns to the sender's own spend group
        let tx = transaction(
            vec![input(1, WALLET, 100, &[(TOKEN_A, 50)], true)],
            vec![output(1, WALLET, 99, &[(TOKEN_A, 50)])],
        );

        assert!(format(&tx, WALLET, 1).is_empty());
    }

    #[test]
    fn test_unreadable_token_amount_uses_alph() {
        let tx = transaction(
            vec![input(1, WALLET, 100, &[(TOKEN_A, 50)], true)],
            vec![output(2, OTHER, 7, &[(TOKEN_A, 0)])],
        );

        let records = format(&tx, WALLET, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, amount(7));
    }
}
