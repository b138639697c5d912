use crate::app::{AppContext, Result, WartaError};
use crate::domain::{format_published, Article};
use crate::editorial::{partition, quick_filter, sort_by_published_at, SortOrder};
use crate::search::{SearchResults, SearchStatus};

pub async fn home(ctx: &AppContext, term: &str, open: Option<usize>) -> Result<()> {
    let results = ctx.search.home(term).await;
    report_failure(&results);

    // The home term also narrows what came back to exact title or
    // description matches.
    let shown = quick_filter(&results.articles, term);
    let layout = partition(&shown);
    if layout.is_empty() {
        println!("No articles for \"{}\"", results.term);
        return Ok(());
    }

    let sections: [(&str, Vec<&Article>); 4] = [
        ("Headline", layout.hero1.into_iter().copied().collect()),
        ("More stories", layout.secondary1.to_vec()),
        ("Also today", layout.secondary2.to_vec()),
        ("Featured", layout.hero2.into_iter().copied().collect()),
    ];

    let mut number = 0;
    for (heading, articles) in sections.iter().filter(|(_, a)| !a.is_empty()) {
        println!("== {} ==", heading);
        for article in articles {
            number += 1;
            print_article(number, article);
        }
    }

    if let Some(n) = open {
        let placed: Vec<&Article> = layout.iter().copied().collect();
        open_numbered(ctx, &placed, n)?;
    }

    Ok(())
}

pub async fn search(
    ctx: &AppContext,
    query: &str,
    sort: SortOrder,
    open: Option<usize>,
) -> Result<()> {
    let Some(mut results) = ctx.search.search_view(query).await else {
        println!("Nothing to search for");
        return Ok(());
    };
    report_failure(&results);

    sort_by_published_at(&mut results.articles, sort);

    println!(
        "Results for \"{}\" ({} articles, {} first)",
        query,
        results.articles.len(),
        sort.label().to_lowercase()
    );
    for (i, article) in results.articles.iter().enumerate() {
        print_article(i + 1, article);
    }

    if let Some(n) = open {
        let listed: Vec<&Article> = results.articles.iter().collect();
        open_numbered(ctx, &listed, n)?;
    }

    Ok(())
}

pub fn history(ctx: &AppContext) -> Result<()> {
    let saved = ctx.bookmarks.list_all();

    if saved.is_empty() {
        println!("No history");
        return Ok(());
    }

    for (i, article) in saved.iter().enumerate() {
        println!("{:>3}. {}\n     {}", i + 1, article.title, article.url);
    }

    Ok(())
}

fn print_article(number: usize, article: &Article) {
    println!("{:>3}. {}", number, article.title);
    if !article.description.is_empty() {
        println!("     {}", article.description);
    }
    println!(
        "     {} - {}",
        article.display_author(),
        format_published(&article.published_at)
    );
    if !article.source_name().is_empty() {
        println!("     {}", article.source_name());
    }
}

fn open_numbered(ctx: &AppContext, articles: &[&Article], number: usize) -> Result<()> {
    let article = number
        .checked_sub(1)
        .and_then(|i| articles.get(i))
        .ok_or_else(|| WartaError::Other(format!("No article numbered {}", number)))?;

    ctx.open_article(article)?;
    println!("Opened {}", article.url);
    Ok(())
}

fn report_failure(results: &SearchResults) {
    if let SearchStatus::Failed(reason) = &results.status {
        eprintln!("Search for \"{}\" failed: {}", results.term, reason);
    }
}
