//! Article field extraction and the persisted record shape
//!
//! Extraction treats a missing structural element as an expected absence,
//! not an error: the corresponding field is simply `None`. The body text is
//! the newline-joined text of the paragraphs inside the designated content
//! container; only the first container is read.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Category label in the article header
const CATEGORY_SELECTOR: &str = "div.flex span.capitalize";

/// Article headline
const TITLE_SELECTOR: &str = "h1";

/// Publication date line under the headline
const DATE_SELECTOR: &str = "p.text-neutral-900";

/// Designated content container
const CONTENT_SELECTOR: &str = "div#content-wrapper";

/// Paragraph-level elements inside the content container
const PARAGRAPH_SELECTOR: &str = "p";

/// Fields extracted from one article page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFields {
    pub category: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub content: Option<String>,
}

/// One row of the record artifact
///
/// `None` fields represent "field absent in source". Failed URLs keep their
/// `url` so every row stays attributable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub category: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub content: Option<String>,
}

impl ArticleRecord {
    /// Record for a URL whose fetch produced nothing
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            category: None,
            title: None,
            date: None,
            content: None,
        }
    }

    /// Record built from extracted fields
    pub fn from_fields(url: impl Into<String>, fields: ArticleFields) -> Self {
        Self {
            url: url.into(),
            category: fields.category,
            title: fields.title,
            date: fields.date,
            content: fields.content,
        }
    }

    /// True when every extracted field is absent
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.title.is_none()
            && self.date.is_none()
            && self.content.is_none()
    }
}

/// Extracts article fields from a detail page body
pub fn extract_fields(html: &str) -> ArticleFields {
    let document = Html::parse_document(html);

    ArticleFields {
        category: select_text(&document, CATEGORY_SELECTOR),
        title: select_text(&document, TITLE_SELECTOR),
        date: select_text(&document, DATE_SELECTOR),
        content: extract_content(&document),
    }
}

/// Trimmed text of the first element matching the selector
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Newline-joined paragraph text of the first content container
fn extract_content(document: &Html) -> Option<String> {
    let container_selector = Selector::parse(CONTENT_SELECTOR).ok()?;
    let paragraph_selector = Selector::parse(PARAGRAPH_SELECTOR).ok()?;

    let container = document.select(&container_selector).next()?;

    let paragraphs: Vec<String> = container
        .select(&paragraph_selector)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ARTICLE: &str = r#"<html><body>
        <div class="flex"><span class="capitalize">politik</span></div>
        <h1>Judul Artikel Percobaan</h1>
        <p class="text-neutral-900">1 Januari 2024</p>
        <div id="content-wrapper">
            <p>Paragraf pertama.</p>
            <p>Paragraf kedua.</p>
        </div>
    </body></html>"#;

    #[test]
    fn test_extract_full_article() {
        let fields = extract_fields(FULL_ARTICLE);
        assert_eq!(fields.category.as_deref(), Some("politik"));
        assert_eq!(fields.title.as_deref(), Some("Judul Artikel Percobaan"));
        assert_eq!(fields.date.as_deref(), Some("1 Januari 2024"));
        assert_eq!(
            fields.content.as_deref(),
            Some("Paragraf pertama.\nParagraf kedua.")
        );
    }

    #[test]
    fn test_missing_category_is_none() {
        let html = r#"<html><body>
            <h1>Judul</h1>
            <div id="content-wrapper"><p>Isi.</p></div>
        </body></html>"#;
        let fields = extract_fields(html);
        assert!(fields.category.is_none());
        assert_eq!(fields.title.as_deref(), Some("Judul"));
    }

    #[test]
    fn test_missing_container_means_no_content() {
        let html = "<html><body><h1>Judul</h1><p>Bukan isi artikel.</p></body></html>";
        let fields = extract_fields(html);
        assert!(fields.content.is_none());
    }

    #[test]
    fn test_container_without_paragraphs_means_no_content() {
        let html = r#"<html><body>
            <div id="content-wrapper"><div>Bukan paragraf</div></div>
        </body></html>"#;
        let fields = extract_fields(html);
        assert!(fields.content.is_none());
    }

    #[test]
    fn test_only_first_container_is_read() {
        let html = r#"<html><body>
            <div id="content-wrapper"><p>Pertama.</p></div>
            <div id="content-wrapper"><p>Kedua.</p></div>
        </body></html>"#;
        let fields = extract_fields(html);
        assert_eq!(fields.content.as_deref(), Some("Pertama."));
    }

    #[test]
    fn test_blank_paragraphs_are_skipped() {
        let html = r#"<html><body>
            <div id="content-wrapper">
                <p>  Satu.  </p>
                <p>   </p>
                <p>Dua.</p>
            </div>
        </body></html>"#;
        let fields = extract_fields(html);
        assert_eq!(fields.content.as_deref(), Some("Satu.\nDua."));
    }

    #[test]
    fn test_empty_document() {
        let fields = extract_fields("<html><body></body></html>");
        assert_eq!(fields, ArticleFields::default());
    }

    #[test]
    fn test_empty_record() {
        let record = ArticleRecord::empty("https://www.tempo.co/a");
        assert!(record.is_empty());
        assert_eq!(record.url, "https://www.tempo.co/a");
    }

    #[test]
    fn test_record_from_fields() {
        let record = ArticleRecord::from_fields("https://www.tempo.co/a", extract_fields(FULL_ARTICLE));
        assert!(!record.is_empty());
        assert_eq!(record.category.as_deref(), Some("politik"));
    }
}
