//! Turns one classified transaction into the transfers it implies for a wallet.
//!
//! Formatters never fail: missing or partial shapes degrade to empty fields or
//! zero amounts.

pub mod accumulator;
pub mod dapp;
pub mod native;
pub mod token;

use log::debug;

use crate::{classifier::ShapedTransaction, model::NormalizedTransfer};

pub fn format(shaped: &ShapedTransaction, wallet: &str, block_number: u32) -> Vec<NormalizedTransfer> {
    let records = match shaped {
        ShapedTransaction::ContractCall(tx) => dapp::format(tx, wallet, block_number),
        ShapedTransaction::TokenTransfer(tx) => token::format(tx, wallet, block_number),
        ShapedTransaction::NativeTransfer(tx) => vec![native::format(tx, wallet, block_number)],
    };
    debug!(
        "[format] {} {:?} -> {} records",
        shaped.transaction().hash,
        shaped.shape(),
        records.len()
    );
    records
}
