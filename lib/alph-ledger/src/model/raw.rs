//! Transaction shapes as served by the explorer backend.
//!
//! Every optional field defaults so that partially populated transactions
//! still deserialize; interpretation happens in [`super::Transaction`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub hash: String,
    #[serde(default)]
    pub block_hash: String,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub inputs: Option<Vec<RawInput>>,
    #[serde(default)]
    pub outputs: Option<Vec<RawOutput>>,
    #[serde(default)]
    pub gas_amount: u64,
    #[serde(default)]
    pub gas_price: String,
    #[serde(default)]
    pub script_execution_ok: bool,
    #[serde(default)]
    pub coinbase: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOutputRef {
    pub hint: i32,
    #[serde(default)]
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    #[serde(default)]
    pub output_ref: Option<RawOutputRef>,
    #[serde(default)]
    pub unlock_script: Option<String>,
    #[serde(default)]
    pub tx_hash_ref: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub atto_alph_amount: Option<String>,
    #[serde(default)]
    pub tokens: Option<Vec<RawToken>>,
    #[serde(default)]
    pub contract_input: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOutput {
    #[serde(rename = "type", default)]
    pub r#type: String,
    #[serde(default)]
    pub hint: i32,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub atto_alph_amount: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tokens: Option<Vec<RawToken>>,
    #[serde(default)]
    pub lock_time: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawToken {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default)]
    pub hash: String,
    pub height: u32,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub chain_from: u32,
    #[serde(default)]
    pub chain_to: u32,
    #[serde(default)]
    pub main_chain: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddressBalance {
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub locked_balance: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenBalance {
    pub token_id: String,
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub locked_balance: String,
}
