//! Contract calls, where the counterparty of a transfer is a contract rather
//! than another wallet.
//!
//! The wallet's side of the call is read from two places:
//! - inputs it unlocked itself, which carry what it paid into the call;
//! - non-contract outputs in its own spend group (same hint), which carry
//!   what the call handed back.
//!
//! Token legs are summed per contract address, so a token fragmented over
//! several inputs or outputs yields a single record. ALPH is reconciled
//! separately as the difference between what the wallet put in and what
//! came back to it.

use std::cmp::Ordering;

use num::BigUint;

use super::accumulator::TransferAccumulator;
use crate::{
    address::contract_address,
    model::{Input, NormalizedTransfer, Output, Transaction, TransferContext},
};

pub fn format(tx: &Transaction, wallet: &str, block_number: u32) -> Vec<NormalizedTransfer> {
    let ctx = TransferContext::new(tx, wallet, block_number);
    let primary_hint = tx.primary_hint();

    let spent = tx
        .inputs
        .iter()
        .filter(|input| input.is_unlocked_by(wallet))
        .collect::<Vec<_>>();
    let wallet_hint = spent
        .first()
        .map_or(primary_hint, |input| input.hint);
    let returned = tx
        .outputs
        .iter()
        .filter(|output| !output.is_contract() && !output.hint_differs(wallet_hint))
        .filter(|output| output.address == wallet)
        .collect::<Vec<_>>();

    let recipient = resolve_recipient(tx, wallet, primary_hint);
    let issuer = tx
        .outputs
        .iter()
        .rev()
        .find(|output| output.is_contract())
        .map(|output| output.address.as_str())
        .unwrap_or_default();

    let mut records = outgoing_tokens(&spent, wallet, recipient)
        .into_records(&ctx, true)
        .collect::<Vec<_>>();

    if let Some(native) = reconcile_native(&ctx, &spent, &returned, wallet, recipient) {
        records.push(native);
    }

    records.extend(incoming_tokens(&returned, wallet, issuer).into_records(&ctx, false));
    records
}

/// First input outside the primary spend group that belongs to someone else,
/// else the first such output. Empty when neither exists.
fn resolve_recipient<'a>(tx: &'a Transaction, wallet: &str, primary_hint: Option<i32>) -> &'a str {
    tx.inputs
        .iter()
        .find(|input| input.hint != primary_hint && input.address != wallet)
        .map(|input| input.address.as_str())
        .or_else(|| {
            tx.outputs
                .iter()
                .find(|output| output.hint_differs(primary_hint) && output.address != wallet)
                .map(|output| output.address.as_str())
        })
        .unwrap_or_default()
}

fn outgoing_tokens(spent: &[&Input], wallet: &str, recipient: &str) -> TransferAccumulator {
    let mut acc = TransferAccumulator::default();
    for token in spent.iter().flat_map(|input| &input.tokens) {
        acc.add(contract_address(&token.id), wallet, recipient, &token.amount);
    }
    acc
}

fn incoming_tokens(returned: &[&Output], wallet: &str, issuer: &str) -> TransferAccumulator {
    let mut acc = TransferAccumulator::default();
    for token in returned.iter().flat_map(|output| &output.tokens) {
        acc.add(contract_address(&token.id), issuer, wallet, &token.amount);
    }
    acc
}

fn reconcile_native(
    ctx: &TransferContext<'_>,
    spent: &[&Input],
    returned: &[&Output],
    wallet: &str,
    recipient: &str,
) -> Option<NormalizedTransfer> {
    let paid = spent
        .iter()
        .map(|input| &input.atto_alph_amount)
        .sum::<BigUint>();
    let received = returned
        .iter()
        .map(|output| &output.atto_alph_amount)
        .sum::<BigUint>();

    match paid.cmp(&received) {
        Ordering::Greater => Some(ctx.record("", wallet, recipient, paid - received, true)),
        Ordering::Less => Some(ctx.record("", recipient, wallet, received - paid, false)),
        Ordering::Equal => None,
    }
}
