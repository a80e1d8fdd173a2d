//! Pagination discovery and listing URL enumeration
//!
//! Listing pages live at `{base}/list/{letter}/` (page 1) and
//! `{base}/list/{letter}/{page}/` (pages 2 and up).

use crate::crawler::parser::ListingPage;
use scraper::Selector;
use url::Url;

/// Page-range bound used when a letter has no "last page" link
pub const SINGLE_PAGE_BOUND: u32 = 2;

/// URL of a letter's first listing page
pub fn letter_url(base_url: &str, letter: char) -> String {
    format!("{}/list/{}/", base_url.trim_end_matches('/'), letter)
}

/// Finds the exclusive upper bound of a letter's page range
///
/// Looks for the first `a` element whose `title` starts with "Last" and reads
/// the final path segment of its `href` as the last page number `k`,
/// returning `k + 1`. A missing link, a missing `href`, or a segment that is
/// not a number all mean the letter has a single page, so the result is
/// [`SINGLE_PAGE_BOUND`].
pub fn discover_last_page(first_page: &ListingPage) -> u32 {
    let Ok(selector) = Selector::parse(r#"a[title^="Last"]"#) else {
        return SINGLE_PAGE_BOUND;
    };

    first_page
        .document
        .select(&selector)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .and_then(parse_page_number)
        .and_then(|last| last.checked_add(1))
        .unwrap_or_else(|| {
            tracing::debug!("No last page link on {}, assuming one page", first_page.url);
            SINGLE_PAGE_BOUND
        })
}

/// Reads the trailing path segment of a link target as a page number
fn parse_page_number(href: &str) -> Option<u32> {
    let path = match Url::parse(href) {
        Ok(url) => url.path().to_string(),
        Err(_) => href.to_string(),
    };

    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

/// Builds the listing URLs for pages `1..last_page_exclusive`, in page order
///
/// Page 1 uses the bare letter path; later pages append the page number.
pub fn enumerate_urls(base_url: &str, letter: char, last_page_exclusive: u32) -> Vec<String> {
    let first = letter_url(base_url, letter);

    (1..last_page_exclusive)
        .map(|page| {
            if page == 1 {
                first.clone()
            } else {
                format!("{}{}/", first, page)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com";

    fn page_with(body: &str) -> ListingPage {
        ListingPage::parse(
            "https://example.com/list/a/",
            &format!("<html><body>{}</body></html>", body),
        )
    }

    #[test]
    fn test_letter_url() {
        assert_eq!(letter_url(BASE, 'a'), "https://example.com/list/a/");
        assert_eq!(
            letter_url("https://example.com/", 'b'),
            "https://example.com/list/b/"
        );
    }

    #[test]
    fn test_discover_last_page() {
        let page = page_with(
            r#"<a href="/list/a/2/" title="Next">›</a>
               <a href="/list/a/57/" title="Last page">Last »</a>"#,
        );
        assert_eq!(discover_last_page(&page), 58);
    }

    #[test]
    fn test_discover_last_page_absolute_href() {
        let page = page_with(r#"<a href="https://example.com/list/k/12/" title="Last">»</a>"#);
        assert_eq!(discover_last_page(&page), 13);
    }

    #[test]
    fn test_discover_last_page_without_trailing_slash() {
        let page = page_with(r#"<a href="/list/k/9" title="Last">»</a>"#);
        assert_eq!(discover_last_page(&page), 10);
    }

    #[test]
    fn test_discover_last_page_absent() {
        let page = page_with(r#"<a href="/list/a/2/" title="Next">›</a>"#);
        assert_eq!(discover_last_page(&page), SINGLE_PAGE_BOUND);
    }

    #[test]
    fn test_discover_last_page_malformed() {
        let no_href = page_with(r#"<a title="Last">»</a>"#);
        assert_eq!(discover_last_page(&no_href), 2);

        let not_a_number = page_with(r#"<a href="/list/a/end/" title="Last">»</a>"#);
        assert_eq!(discover_last_page(&not_a_number), 2);
    }

    #[test]
    fn test_enumerate_urls() {
        let urls = enumerate_urls(BASE, 'a', 4);
        assert_eq!(
            urls,
            vec![
                "https://example.com/list/a/",
                "https://example.com/list/a/2/",
                "https://example.com/list/a/3/",
            ]
        );
    }

    #[test]
    fn test_enumerate_urls_count() {
        for letter in ['a', 'm', 'z'] {
            for n in 2..12 {
                let urls = enumerate_urls(BASE, letter, n);
                assert_eq!(urls.len(), (n - 1) as usize);
                assert_eq!(urls[0], letter_url(BASE, letter));
                for (index, url) in urls.iter().enumerate().skip(1) {
                    assert!(url.ends_with(&format!("/{}/{}/", letter, index + 1)));
                }
            }
        }
    }

    #[test]
    fn test_enumerate_urls_single_page() {
        assert_eq!(enumerate_urls(BASE, 'q', SINGLE_PAGE_BOUND).len(), 1);
        assert!(enumerate_urls(BASE, 'q', 1).is_empty());
    }
}
