use std::sync::Arc;

use futures::future::{join_all, try_join_all};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::{
    balance::{self, WalletBalances},
    cache::BlockHeightCache,
    classifier::ShapedTransaction,
    client::{HttpIndexer, IndexerApi},
    config::LedgerConfig,
    formatter,
    model::{NormalizedTransfer, RawTransaction, Transaction},
    resolver::HeightResolver,
    Result,
};

/// What to do with a page when one of its transactions cannot be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Reject the whole page with the first error.
    #[default]
    FailFast,
    /// Drop the failed transactions and keep the rest in order.
    SkipFailed,
}

/// Builds the transfer ledger of a wallet, one page of history at a time.
pub struct Ledger {
    api: Arc<dyn IndexerApi>,
    resolver: HeightResolver,
    page_policy: PagePolicy,
}

impl Ledger {
    pub fn new(api: Arc<dyn IndexerApi>, resolver: HeightResolver, page_policy: PagePolicy) -> Self {
        Self {
            api,
            resolver,
            page_policy,
        }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        let api: Arc<dyn IndexerApi> = Arc::new(HttpIndexer::new(config.backend_url()));
        let cache = Arc::new(BlockHeightCache::new(&config.cache));
        let resolver = HeightResolver::new(Arc::clone(&api), cache, config.retry.clone());
        Self::new(api, resolver, config.page_policy)
    }

    pub fn resolver(&self) -> &HeightResolver {
        &self.resolver
    }

    pub async fn transfers(
        &self,
        address: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<NormalizedTransfer>> {
        let txs = self
            .api
            .address_transactions(address, page, limit)
            .await
            .inspect_err(|e| error!("[transfers] Error on fetching wallet transactions: {e}"))?;
        debug!("[transfers] {address} page {page}: {} transactions", txs.len());

        self.format_page(address, txs).await
    }

    /// Formats every transaction of a page concurrently. Records keep the
    /// order of `txs` regardless of which lookups finish first.
    pub async fn format_page(
        &self,
        address: &str,
        txs: Vec<RawTransaction>,
    ) -> Result<Vec<NormalizedTransfer>> {
        let pending = txs
            .into_iter()
            .map(|raw| self.format_transaction(address, raw));

        let per_tx = match self.page_policy {
            PagePolicy::FailFast => try_join_all(pending).await?,
            PagePolicy::SkipFailed => join_all(pending)
                .await
                .into_iter()
                .filter_map(|res| {
                    res.inspect_err(|e| warn!("[format_page] skipping transaction: {e}"))
                        .ok()
                })
                .collect(),
        };

        Ok(per_tx.into_iter().flatten().collect())
    }

    pub async fn format_transaction(
        &self,
        address: &str,
        raw: RawTransaction,
    ) -> Result<Vec<NormalizedTransfer>> {
        let shaped = ShapedTransaction::from(Transaction::from(raw));
        let height = self
            .resolver
            .resolve(&shaped.transaction().block_hash)
            .await?;

        Ok(formatter::format(&shaped, address, height))
    }

    pub async fn balances(&self, address: &str) -> Result<WalletBalances> {
        balance::wallet_balances(self.api.as_ref(), address).await
    }
}
