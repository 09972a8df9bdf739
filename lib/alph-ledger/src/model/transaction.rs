use std::str::FromStr;

use num::BigUint;
use rust_decimal::Decimal;

use super::raw::{RawInput, RawOutput, RawToken, RawTransaction};

pub const ALPH_DECIMALS: u32 = 18;

pub const CONTRACT_OUTPUT_TYPE: &str = "ContractOutput";

/// Parses a decimal amount string, treating anything malformed as zero.
#[must_use]
pub fn parse_amount(amount: &str) -> BigUint {
    BigUint::from_str(amount.trim()).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: String,
    pub amount: BigUint,
}

impl From<RawToken> for Token {
    fn from(token: RawToken) -> Self {
        Self {
            amount: parse_amount(&token.amount),
            id: token.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Asset,
    Contract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub hint: Option<i32>,
    pub key: String,
    pub unlock_script: Option<String>,
    pub address: String,
    pub atto_alph_amount: BigUint,
    pub tokens: Vec<Token>,
}

impl Input {
    /// Spent by `wallet` itself rather than merely attributed to it.
    #[must_use]
    pub fn is_unlocked_by(&self, wallet: &str) -> bool {
        self.address == wallet
            && self
                .unlock_script
                .as_deref()
                .is_some_and(|script| !script.is_empty())
    }

    #[must_use]
    pub fn token_amount(&self, token_id: &str) -> Option<&BigUint> {
        find_token(&self.tokens, token_id)
    }
}

impl From<RawInput> for Input {
    fn from(input: RawInput) -> Self {
        let (hint, key) = input
            .output_ref
            .map_or((None, String::new()), |r| (Some(r.hint), r.key));

        Self {
            hint,
            key,
            unlock_script: input.unlock_script,
            address: input.address.unwrap_or_default(),
            atto_alph_amount: input
                .atto_alph_amount
                .as_deref()
                .map(parse_amount)
                .unwrap_or_default(),
            tokens: input
                .tokens
                .unwrap_or_default()
                .into_iter()
                .map(Token::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub kind: OutputKind,
    pub hint: i32,
    pub key: String,
    pub address: String,
    pub atto_alph_amount: BigUint,
    pub tokens: Vec<Token>,
    pub lock_time: Option<u64>,
    pub message: Option<String>,
}

impl Output {
    #[must_use]
    pub fn is_contract(&self) -> bool {
        self.kind == OutputKind::Contract
    }

    /// Whether this output sits in a different spend group than `hint`.
    #[must_use]
    pub fn hint_differs(&self, hint: Option<i32>) -> bool {
        Some(self.hint) != hint
    }

    #[must_use]
    pub fn token_amount(&self, token_id: &str) -> Option<&BigUint> {
        find_token(&self.tokens, token_id)
    }
}

impl From<RawOutput> for Output {
    fn from(output: RawOutput) -> Self {
        let kind = if output.r#type == CONTRACT_OUTPUT_TYPE {
            OutputKind::Contract
        } else {
            OutputKind::Asset
        };

        Self {
            kind,
            hint: output.hint,
            key: output.key,
            address: output.address,
            atto_alph_amount: parse_amount(&output.atto_alph_amount),
            tokens: output
                .tokens
                .unwrap_or_default()
                .into_iter()
                .map(Token::from)
                .collect(),
            lock_time: output.lock_time,
            message: output.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub hash: String,
    pub block_hash: String,
    pub timestamp: u64,
    pub gas_price: Decimal,
    pub gas_amount: u64,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub script_execution_ok: bool,
    pub coinbase: bool,
}

impl Transaction {
    /// Hint of the first input, the spend group the transaction is anchored on.
    #[must_use]
    pub fn primary_hint(&self) -> Option<i32> {
        self.inputs.first().and_then(|input| input.hint)
    }

    /// `gas_price * gas_amount` expressed in whole ALPH.
    #[must_use]
    pub fn tx_cost(&self) -> Decimal {
        let atto = Decimal::from(10u64.pow(ALPH_DECIMALS));
        self.gas_price
            .checked_mul(Decimal::from(self.gas_amount))
            .and_then(|cost| cost.checked_div(atto))
            .unwrap_or_default()
            .normalize()
    }

    #[must_use]
    pub fn has_contract_output(&self) -> bool {
        self.outputs.iter().any(Output::is_contract)
    }

    #[must_use]
    pub fn has_token_input(&self) -> bool {
        self.inputs.iter().any(|input| !input.tokens.is_empty())
    }
}

impl From<RawTransaction> for Transaction {
    fn from(tx: RawTransaction) -> Self {
        Self {
            gas_price: Decimal::from_str(tx.gas_price.trim()).unwrap_or_default(),
            hash: tx.hash,
            block_hash: tx.block_hash,
            timestamp: tx.timestamp,
            gas_amount: tx.gas_amount,
            inputs: tx
                .inputs
                .unwrap_or_default()
                .into_iter()
                .map(Input::from)
                .collect(),
            outputs: tx
                .outputs
                .unwrap_or_default()
                .into_iter()
                .map(Output::from)
                .collect(),
            script_execution_ok: tx.script_execution_ok,
            coinbase: tx.coinbase,
        }
    }
}

fn find_token<'a>(tokens: &'a [Token], token_id: &str) -> Option<&'a BigUint> {
    tokens
        .iter()
        .find(|token| token.id == token_id)
        .map(|token| &token.amount)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::model::raw::RawOutputRef;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000000000000000000"), BigUint::from(10u64.pow(18)));
        assert_eq!(
            parse_amount("115792089237316195423570985008687907853269984665640564039457584007913129639935")
                .to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert_eq!(parse_amount("-5"), BigUint::default());
        assert_eq!(parse_amount("abc"), BigUint::default());
        assert_eq!(parse_amount(""), BigUint::default());
    }

    #[test]
    fn test_tx_cost() {
        let tx = Transaction::from(RawTransaction {
            hash: "aa".into(),
            gas_price: "100000000000".into(),
            gas_amount: 20000,
            ..Default::default()
        });
        assert_eq!(tx.tx_cost(), dec!(0.002));
        assert_eq!(tx.tx_cost().to_string(), "0.002");

        let malformed = Transaction::from(RawTransaction {
            hash: "bb".into(),
            gas_price: "not a number".into(),
            gas_amount: 20000,
            ..Default::default()
        });
        assert_eq!(malformed.tx_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_input_unlock() {
        let input = Input::from(RawInput {
            output_ref: Some(RawOutputRef { hint: 7, key: "k".into() }),
            unlock_script: Some("00ab".into()),
            address: Some("wallet".into()),
            atto_alph_amount: Some("10".into()),
            ..Default::default()
        });
        assert_eq!(input.hint, Some(7));
        assert!(input.is_unlocked_by("wallet"));
        assert!(!input.is_unlocked_by("someone"));

        let attributed = Input {
            unlock_script: None,
            ..input
        };
        assert!(!attributed.is_unlocked_by("wallet"));
    }

    #[test]
    fn test_output_kind() {
        let output = Output::from(RawOutput {
            r#type: CONTRACT_OUTPUT_TYPE.into(),
            hint: 1,
            address: "pool".into(),
            atto_alph_amount: "5".into(),
            ..Default::default()
        });
        assert!(output.is_contract());
        assert!(output.hint_differs(Some(2)));
        assert!(output.hint_differs(None));
        assert!(!output.hint_differs(Some(1)));
    }
}
