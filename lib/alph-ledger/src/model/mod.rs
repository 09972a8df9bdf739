pub mod raw;
mod transaction;
mod transfer;

pub use raw::*;
pub use transaction::*;
pub use transfer::*;
