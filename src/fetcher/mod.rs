pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// One outbound query against the news search endpoint.
///
/// Implementations return the raw response body; decoding lives in the
/// normalizer.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, term: &str) -> Result<Vec<u8>>;
}
