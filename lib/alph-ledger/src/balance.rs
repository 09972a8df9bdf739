use num::BigUint;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::{
    address::contract_address,
    client::IndexerApi,
    model::{parse_amount, RawAddressBalance, RawTokenBalance},
    Result,
};

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetBalance {
    /// Empty for ALPH.
    pub token_id: String,
    pub contract: String,
    #[serde_as(as = "DisplayFromStr")]
    pub balance: BigUint,
    #[serde_as(as = "DisplayFromStr")]
    pub locked_balance: BigUint,
}

impl From<RawAddressBalance> for AssetBalance {
    fn from(raw: RawAddressBalance) -> Self {
        Self {
            token_id: String::new(),
            contract: String::new(),
            balance: parse_amount(&raw.balance),
            locked_balance: parse_amount(&raw.locked_balance),
        }
    }
}

impl From<RawTokenBalance> for AssetBalance {
    fn from(raw: RawTokenBalance) -> Self {
        Self {
            contract: contract_address(&raw.token_id),
            balance: parse_amount(&raw.balance),
            locked_balance: parse_amount(&raw.locked_balance),
            token_id: raw.token_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletBalances {
    pub address: String,
    pub native: AssetBalance,
    pub tokens: Vec<AssetBalance>,
}

/// Fetches the ALPH and token balances of `address` concurrently.
pub async fn wallet_balances(api: &dyn IndexerApi, address: &str) -> Result<WalletBalances> {
    let (native, tokens) = futures::try_join!(
        api.address_balance(address),
        api.address_tokens_balance(address)
    )?;

    Ok(WalletBalances {
        address: address.to_string(),
        native: native.into(),
        tokens: tokens.into_iter().map(AssetBalance::from).collect(),
    })
}
