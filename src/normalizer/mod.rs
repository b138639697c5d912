use html_escape::decode_html_entities;
use serde::Deserialize;

use crate::app::{Result, WartaError};
use crate::domain::Article;

/// The `/v2/everything` response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

impl Envelope {
    fn into_error(self) -> WartaError {
        WartaError::Api {
            code: self.code.unwrap_or_else(|| "unknown".into()),
            message: self.message.unwrap_or_default(),
        }
    }
}

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Decode a search response body into articles, in upstream order.
    ///
    /// No filtering happens here; records without an image are still
    /// returned.
    pub fn normalize(&self, body: &[u8]) -> Result<Vec<Article>> {
        let envelope: Envelope = serde_json::from_slice(body)?;

        if envelope.status == "error" {
            return Err(envelope.into_error());
        }

        Ok(envelope.articles.into_iter().map(decode_entities).collect())
    }
}

/// Extract the API's own error from a rejected response body, if it has one.
pub fn api_error(body: &[u8]) -> Option<WartaError> {
    let envelope: Envelope = serde_json::from_slice(body).ok()?;
    (envelope.status == "error").then(|| envelope.into_error())
}

fn decode_entities(mut article: Article) -> Article {
    article.title = decode_html_entities(&article.title).to_string();
    article.description = decode_html_entities(&article.description).to_string();
    article.source.name = decode_html_entities(&article.source.name).to_string();
    article.author = article
        .author
        .map(|author| decode_html_entities(&author).to_string());
    article
}
