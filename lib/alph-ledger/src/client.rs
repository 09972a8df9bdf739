use async_trait::async_trait;
use hyper::{
    body::Bytes,
    client::HttpConnector,
    Client, StatusCode, Uri,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use log::debug;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::{
    error::{Error, InvalidUriSnafu},
    model::{RawAddressBalance, RawBlock, RawTokenBalance, RawTransaction},
    Result,
};

/// Read side of the explorer backend.
#[async_trait]
pub trait IndexerApi: Send + Sync {
    /// `GET /blocks/{block_hash}`. Any non-2xx answer is a [`Error::BlockLookup`].
    async fn block(&self, block_hash: &str) -> Result<RawBlock>;

    /// `GET /addresses/{address}/transactions?page={page}&limit={limit}`.
    async fn address_transactions(
        &self,
        address: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<RawTransaction>>;

    /// `GET /addresses/{address}/balance`.
    async fn address_balance(&self, address: &str) -> Result<RawAddressBalance>;

    /// `GET /addresses/{address}/tokens-balance`.
    async fn address_tokens_balance(&self, address: &str) -> Result<Vec<RawTokenBalance>>;
}

/// Maps a non-2xx status of the transaction source to its error kind.
pub fn check_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    let url = url.to_string();
    Err(match status {
        StatusCode::BAD_REQUEST => Error::BadRequest { url },
        StatusCode::UNAUTHORIZED => Error::Unauthorized { url },
        StatusCode::NOT_FOUND => Error::NotFound { url },
        _ => Error::FetchFailed {
            url,
            status: status.as_u16(),
        },
    })
}

pub struct HttpIndexer {
    client: Client<HttpsConnector<HttpConnector>>,
    base_url: String,
}

impl HttpIndexer {
    pub fn new(base_url: &str) -> Self {
        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();

        Self {
            client: Client::builder().build(https),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<(String, StatusCode, Bytes)> {
        let url = format!("{}{path}", self.base_url);
        let uri = url.parse::<Uri>().context(InvalidUriSnafu { url: &url })?;
        debug!("[HttpIndexer::get] GET {url}");

        let response = self.client.get(uri).await?;
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await?;
        Ok((url, status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (url, status, body) = self.get(path).await?;
        check_status(&url, status)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl IndexerApi for HttpIndexer {
    async fn block(&self, block_hash: &str) -> Result<RawBlock> {
        let (_, status, body) = self.get(&format!("/blocks/{block_hash}")).await?;
        if !status.is_success() {
            return Err(Error::BlockLookup {
                block_hash: block_hash.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn address_transactions(
        &self,
        address: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<RawTransaction>> {
        self.get_json(&format!(
            "/addresses/{address}/transactions?page={page}&limit={limit}"
        ))
        .await
    }

    async fn address_balance(&self, address: &str) -> Result<RawAddressBalance> {
        self.get_json(&format!("/addresses/{address}/balance")).await
    }

    async fn address_tokens_balance(&self, address: &str) -> Result<Vec<RawTokenBalance>> {
        self.get_json(&format!("/addresses/{address}/tokens-balance"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        let url = "https://backend/addresses/a/transactions";
        assert!(check_status(url, StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(url, StatusCode::BAD_REQUEST),
            Err(Error::BadRequest { .. })
        ));
        assert!(matches!(
            check_status(url, StatusCode::UNAUTHORIZED),
            Err(Error::Unauthorized { .. })
        ));
        assert!(matches!(
            check_status(url, StatusCode::NOT_FOUND),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            check_status(url, StatusCode::BAD_GATEWAY),
            Err(Error::FetchFailed { status: 502, .. })
        ));
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let indexer = HttpIndexer::new("https://backend.mainnet.alephium.org/");
        assert_eq!(indexer.base_url(), "https://backend.mainnet.alephium.org");
    }
}
