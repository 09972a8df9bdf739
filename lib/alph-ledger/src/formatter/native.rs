use indexmap::IndexSet;
use num::BigUint;

use crate::model::{NormalizedTransfer, Transaction, TransferContext};

/// Plain ALPH movement. Always yields exactly one record.
///
/// The receiver is the first output outside the primary input's spend group
/// (falling back to the first output inside it). The wallet is the sender only
/// when it is the sole address among the inputs; otherwise the record is
/// incoming and carries everything paid to the wallet.
pub fn format(tx: &Transaction, wallet: &str, block_number: u32) -> NormalizedTransfer {
    let ctx = TransferContext::new(tx, wallet, block_number);
    let primary_hint = tx.primary_hint();

    let receiver = tx
        .outputs
        .iter()
        .find(|output| output.hint_differs(primary_hint))
        .or_else(|| {
            tx.outputs
                .iter()
                .find(|output| !output.hint_differs(primary_hint))
        });

    let to = receiver
        .map(|output| output.address.as_str())
        .filter(|address| !address.is_empty())
        .unwrap_or(wallet);

    let senders = tx
        .inputs
        .iter()
        .map(|input| input.address.as_str())
        .collect::<IndexSet<_>>();
    let from = senders.iter().copied().collect::<Vec<_>>().join(", ");
    let is_out = senders.len() == 1 && senders.contains(wallet);

    let amount = if is_out {
        let spent_token = tx
            .inputs
            .first()
            .and_then(|input| input.tokens.first())
            .map(|token| token.id.as_str());

        receiver.map_or_else(BigUint::default, |output| {
            spent_token
                .and_then(|id| output.token_amount(id))
                .unwrap_or(&output.atto_alph_amount)
                .clone()
        })
    } else {
        tx.outputs
            .iter()
            .filter(|output| output.address == wallet)
            .map(|output| &output.atto_alph_amount)
            .sum()
    };

    ctx.record("", from, to, amount, is_out)
}
