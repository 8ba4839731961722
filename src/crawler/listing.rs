//! Listing-page parsing: article anchors and the next-page control

use scraper::{Html, Selector};
use url::Url;

/// Anchors inside article teaser containers on the index page
const ARTICLE_ANCHOR_SELECTOR: &str = "figure a[href]";

/// Pagination control; its value attribute carries the next page number
const NEXT_PAGE_SELECTOR: &str = r#"button[aria-label="Next Page"]"#;

/// Extracted information from one listing page
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// Absolute, same-origin article URLs in document order
    pub links: Vec<String>,

    /// Page number announced by the next-page control, if present
    pub next_page: Option<u32>,
}

/// Parses a listing page body
///
/// Article anchors are resolved against the site origin; anchors that leave
/// the origin (or use a non-http scheme) are dropped, so every returned URL
/// starts with the origin.
///
/// # Arguments
///
/// * `html` - The listing page body
/// * `origin` - The configured site origin used to resolve relative hrefs
pub fn parse_listing(html: &str, origin: &Url) -> ListingPage {
    let document = Html::parse_document(html);

    ListingPage {
        links: extract_article_links(&document, origin),
        next_page: extract_next_page(&document),
    }
}

/// Extracts absolute article URLs from teaser anchors
fn extract_article_links(document: &Html, origin: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse(ARTICLE_ANCHOR_SELECTOR) {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute) = resolve_article_link(href, origin) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

/// Resolves an anchor href to an absolute same-origin URL
///
/// Returns None for empty hrefs, fragment-only anchors, non-http(s)
/// schemes, and URLs that resolve outside the origin.
fn resolve_article_link(href: &str, origin: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:") || href.starts_with("mailto:") || href.starts_with("tel:") {
        return None;
    }

    let absolute = origin.join(href).ok()?;

    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return None;
    }

    // Article links must stay on the configured site
    if !absolute.as_str().starts_with(origin.as_str()) {
        return None;
    }

    Some(absolute.to_string())
}

/// Reads the next-page control's target page number
fn extract_next_page(document: &Html) -> Option<u32> {
    let selector = Selector::parse(NEXT_PAGE_SELECTOR).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("value"))
        .and_then(|value| value.trim().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://www.tempo.co").unwrap()
    }

    #[test]
    fn test_extract_relative_anchor() {
        let html = r#"<html><body>
            <figure><a href="/politik/contoh-artikel-1">Artikel</a></figure>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert_eq!(
            page.links,
            vec!["https://www.tempo.co/politik/contoh-artikel-1".to_string()]
        );
    }

    #[test]
    fn test_extract_multiple_anchors_in_order() {
        let html = r#"<html><body>
            <figure><a href="/a">A</a></figure>
            <figure><a href="/b">B</a></figure>
            <figure><a href="/c">C</a></figure>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert_eq!(page.links.len(), 3);
        assert_eq!(page.links[0], "https://www.tempo.co/a");
        assert_eq!(page.links[2], "https://www.tempo.co/c");
    }

    #[test]
    fn test_anchor_outside_figure_ignored() {
        let html = r#"<html><body>
            <a href="/nav-link">Nav</a>
            <figure><a href="/artikel">Artikel</a></figure>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert_eq!(page.links, vec!["https://www.tempo.co/artikel".to_string()]);
    }

    #[test]
    fn test_cross_origin_anchor_dropped() {
        let html = r#"<html><body>
            <figure><a href="https://other.example.com/story">Elsewhere</a></figure>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_special_scheme_anchors_dropped() {
        let html = r##"<html><body>
            <figure><a href="javascript:void(0)">JS</a></figure>
            <figure><a href="mailto:redaksi@tempo.co">Mail</a></figure>
            <figure><a href="#top">Top</a></figure>
        </body></html>"##;
        let page = parse_listing(html, &origin());
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_empty_page_has_no_links() {
        let page = parse_listing("<html><body></body></html>", &origin());
        assert!(page.links.is_empty());
        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_next_page_control() {
        let html = r#"<html><body>
            <figure><a href="/artikel">Artikel</a></figure>
            <button aria-label="Next Page" value="2">&gt;</button>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert_eq!(page.next_page, Some(2));
    }

    #[test]
    fn test_next_page_with_garbage_value() {
        let html = r#"<html><body>
            <button aria-label="Next Page" value="soon">&gt;</button>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_next_page_missing_value_attribute() {
        let html = r#"<html><body>
            <button aria-label="Next Page">&gt;</button>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_every_link_starts_with_origin() {
        let html = r#"<html><body>
            <figure><a href="/a">A</a></figure>
            <figure><a href="https://www.tempo.co/b">B</a></figure>
            <figure><a href="https://evil.example.com/c">C</a></figure>
        </body></html>"#;
        let page = parse_listing(html, &origin());
        assert_eq!(page.links.len(), 2);
        for link in &page.links {
            assert!(link.starts_with("https://www.tempo.co"));
        }
    }
}
