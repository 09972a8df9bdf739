//! Derivation of contract addresses from token ids.
//!
//! A token id is the id of the contract that issued it, so its canonical
//! address is the base58 encoding of the pay-to-contract prefix followed by
//! the raw id bytes.

use log::debug;

/// Address type byte of a pay-to-contract address.
pub const P2C_PREFIX: u8 = 0x03;

/// Returns the contract address for `token_id`, or an empty string when the id
/// is empty or not valid hex.
#[must_use]
pub fn contract_address(token_id: &str) -> String {
    if token_id.is_empty() {
        return String::new();
    }
    let Ok(id) = hex::decode(token_id) else {
        debug!("[contract_address] skipping malformed token id {token_id}");
        return String::new();
    };

    let mut payload = Vec::with_capacity(id.len() + 1);
    payload.push(P2C_PREFIX);
    payload.extend_from_slice(&id);
    bitcoin::base58::encode(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_ID: &str = "1a281053ba8601a658368594da034c2e99a0fb951b86498d05e76aedfe666800";

    #[test]
    fn test_contract_address_decodes_back_to_id() {
        let address = contract_address(TOKEN_ID);
        assert!(!address.is_empty());

        let decoded = bitcoin::base58::decode(&address).unwrap();
        assert_eq!(decoded[0], P2C_PREFIX);
        assert_eq!(hex::encode(&decoded[1..]), TOKEN_ID);
    }

    #[test]
    fn test_contract_address_is_deterministic() {
        assert_eq!(contract_address(TOKEN_ID), contract_address(TOKEN_ID));
        assert_ne!(
            contract_address(TOKEN_ID),
            contract_address(&"00".repeat(32))
        );
    }

    #[test]
    fn test_malformed_token_id() {
        assert_eq!(contract_address("not-hex"), "");
        assert_eq!(contract_address("abc"), "");
        assert_eq!(contract_address(""), "");
    }
}
