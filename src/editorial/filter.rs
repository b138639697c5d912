use crate::domain::Article;

/// Narrow an already-fetched list to articles whose title or description
/// contains `query`, ignoring case. A blank query keeps everything.
pub fn quick_filter<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return articles.iter().collect();
    }

    articles
        .iter()
        .filter(|article| {
            article.title.to_lowercase().contains(&needle)
                || article.description.to_lowercase().contains(&needle)
        })
        .collect()
}
