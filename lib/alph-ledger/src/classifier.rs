use crate::model::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionShape {
    /// At least one output is held by a contract.
    ContractCall,
    /// No contract output, but some input carries tokens.
    TokenTransfer,
    /// Plain ALPH movement.
    NativeTransfer,
}

impl TransactionShape {
    /// Contract outputs take precedence over token-bearing inputs.
    pub fn of(tx: &Transaction) -> Self {
        if tx.has_contract_output() {
            TransactionShape::ContractCall
        } else if tx.has_token_input() {
            TransactionShape::TokenTransfer
        } else {
            TransactionShape::NativeTransfer
        }
    }
}

/// A transaction tagged with its shape once, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedTransaction {
    ContractCall(Transaction),
    TokenTransfer(Transaction),
    NativeTransfer(Transaction),
}

impl ShapedTransaction {
    pub fn shape(&self) -> TransactionShape {
        match self {
            ShapedTransaction::ContractCall(_) => TransactionShape::ContractCall,
            ShapedTransaction::TokenTransfer(_) => TransactionShape::TokenTransfer,
            ShapedTransaction::NativeTransfer(_) => TransactionShape::NativeTransfer,
        }
    }

    pub fn transaction(&self) -> &Transaction {
        match self {
            ShapedTransaction::ContractCall(tx)
            | ShapedTransaction::TokenTransfer(tx)
            | ShapedTransaction::NativeTransfer(tx) => tx,
        }
    }
}

impl From<Transaction> for ShapedTransaction {
    fn from(tx: Transaction) -> Self {
        match TransactionShape::of(&tx) {
            TransactionShape::ContractCall => ShapedTransaction::ContractCall(tx),
            TransactionShape::TokenTransfer => ShapedTransaction::TokenTransfer(tx),
            TransactionShape::NativeTransfer => ShapedTransaction::NativeTransfer(tx),
        }
    }
}
