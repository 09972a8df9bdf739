pub mod address;
pub mod balance;
pub mod cache;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod formatter;
mod ledger;
pub mod model;
pub mod network;
pub mod resolver;
pub mod retry;

pub use error::Error;
pub use ledger::{Ledger, PagePolicy};

pub type Result<T> = std::result::Result<T, Error>;
