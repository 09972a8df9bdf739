use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Bad request: Something bad in the request to {url}"))]
    BadRequest { url: String },
    #[snafu(display("Unauthorized: {url}"))]
    Unauthorized { url: String },
    #[snafu(display("Not found: {url}"))]
    NotFound { url: String },
    #[snafu(display("Failed to fetch {url}: status {status}"))]
    FetchFailed { url: String, status: u16 },
    #[snafu(display("Failed to fetch block number for block hash {block_hash}: status {status}"))]
    BlockLookup { block_hash: String, status: u16 },
    #[snafu(display(
        "Unable to resolve height of block {block_hash} after {attempts} attempts: {source}"
    ))]
    HeightResolution {
        block_hash: String,
        attempts: u32,
        #[snafu(source(from(Error, Box::new)))]
        source: Box<Error>,
    },
    #[snafu(display("Invalid indexer url {url}: {source}"))]
    InvalidUri {
        url: String,
        source: hyper::http::uri::InvalidUri,
    },
    #[snafu(context(false))]
    HyperError {
        #[snafu(source)]
        error: hyper::Error,
    },
    #[snafu(context(false))]
    SerdeJSONError {
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(context(false))]
    IOError {
        #[snafu(source)]
        error: std::io::Error,
    },
}

impl Error {
    /// Transport failures that abort a page immediately instead of being retried.
    #[must_use]
    pub fn is_transport_status(&self) -> bool {
        matches!(
            self,
            Error::BadRequest { .. }
                | Error::Unauthorized { .. }
                | Error::NotFound { .. }
                | Error::FetchFailed { .. }
        )
    }
}
