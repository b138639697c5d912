use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Publisher reference as NewsAPI nests it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single search result.
///
/// Field names on the wire match the NewsAPI article shape, so the same
/// record can be decoded from a search response and written back into the
/// bookmark slot unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "urlToImage", default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Only articles with an image are shown in the home and search views.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    pub fn display_author(&self) -> &str {
        match self.author.as_deref() {
            Some(author) if !author.is_empty() => author,
            _ => UNKNOWN_AUTHOR,
        }
    }

    pub fn published_instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }
}

/// Parse an ISO-8601 timestamp as NewsAPI emits it.
///
/// Accepts full RFC 3339, a naive date-time (taken as UTC) and a bare date
/// (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"{
            "source": {"id": null, "name": "Kompas"},
            "author": "Rina",
            "title": "Headline",
            "description": "Summary",
            "url": "https://example.com/a",
            "urlToImage": "https://example.com/a.jpg",
            "publishedAt": "2024-06-01T10:30:00Z",
            "content": "ignored"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Headline");
        assert_eq!(article.image_url, "https://example.com/a.jpg");
        assert_eq!(article.source_name(), "Kompas");
        assert_eq!(article.display_author(), "Rina");
        assert_eq!(article.published_at, "2024-06-01T10:30:00Z");
    }

    #[test]
    fn test_null_fields_become_empty() {
        let json = r#"{
            "source": {"id": null, "name": null},
            "author": null,
            "title": "Headline",
            "description": null,
            "url": "https://example.com/a",
            "urlToImage": null,
            "publishedAt": "2024-06-01T10:30:00Z"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.description, "");
        assert_eq!(article.image_url, "");
        assert_eq!(article.source_name(), "");
        assert!(!article.has_image());
    }

    #[test]
    fn test_serializes_with_upstream_names() {
        let mut article = Article::new("T", "https://example.com/a");
        article.image_url = "https://example.com/a.jpg".into();
        article.published_at = "2024-01-01".into();

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["urlToImage"], "https://example.com/a.jpg");
        assert_eq!(value["publishedAt"], "2024-01-01");
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_display_author_placeholder() {
        let mut article = Article::new("T", "u");
        assert_eq!(article.display_author(), UNKNOWN_AUTHOR);

        article.author = Some(String::new());
        assert_eq!(article.display_author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-06-01"), Some(expected));
        assert_eq!(parse_timestamp("2024-06-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-06-01T00:00:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-06-01T07:00:00+07:00"),
            Some(expected)
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
