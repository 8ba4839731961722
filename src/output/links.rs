//! The append-only article URL list

use crate::crawler::ArticleLink;
use crate::output::OutputResult;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Appends links to the URL list, one absolute URL per line
///
/// The file is created on first use; repeated crawl runs accumulate.
pub async fn append_links(path: &Path, links: &[ArticleLink]) -> OutputResult<()> {
    tracing::info!("Saving {} URLs to {}", links.len(), path.display());

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    let mut buffer = String::new();
    for link in links {
        buffer.push_str(&link.url);
        buffer.push('\n');
    }

    file.write_all(buffer.as_bytes()).await?;
    file.flush().await?;

    Ok(())
}

/// Reads the URL list back, trimming whitespace and skipping blank lines
pub async fn read_links(path: &Path) -> OutputResult<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
