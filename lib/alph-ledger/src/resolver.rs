use std::sync::Arc;

use log::debug;

use crate::{
    cache::BlockHeightCache,
    client::IndexerApi,
    error::Error,
    retry::{self, RetryPolicy},
    Result,
};

/// Resolves block hashes to heights through the explorer, memoizing every
/// successful lookup in the injected [`BlockHeightCache`].
pub struct HeightResolver {
    api: Arc<dyn IndexerApi>,
    cache: Arc<BlockHeightCache>,
    retry: RetryPolicy,
}

impl HeightResolver {
    pub fn new(api: Arc<dyn IndexerApi>, cache: Arc<BlockHeightCache>, retry: RetryPolicy) -> Self {
        Self { api, cache, retry }
    }

    pub fn cache(&self) -> &Arc<BlockHeightCache> {
        &self.cache
    }

    pub async fn resolve(&self, block_hash: &str) -> Result<u32> {
        let slot = self.cache.slot(block_hash);
        if let Some(height) = slot.get() {
            debug!("[resolve_height] cache hit {block_hash} -> {height}");
            return Ok(*height);
        }

        let height = slot.get_or_try_init(|| self.fetch(block_hash)).await?;
        Ok(*height)
    }

    async fn fetch(&self, block_hash: &str) -> Result<u32> {
        let api = &self.api;
        let height = retry::with_backoff(&self.retry, "resolve_height", || async move {
            api.block(block_hash).await.map(|block| block.height)
        })
        .await
        .map_err(|(source, attempts)| Error::HeightResolution {
            block_hash: block_hash.to_string(),
            attempts,
            source: Box::new(source),
        })?;

        debug!("[resolve_height] resolved {block_hash} -> {height}");
        Ok(height)
    }
}
