use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::{info_time, Error, Result};

/// One quotation block scraped off a page.
///
/// Tags keep the order they appear in on the page, with duplicates dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}

/// Attempts to parse the page, extracting every quote block.
/// An empty result means the page has no content at all.
pub(crate) async fn extract_quotes(html: String) -> Result<Vec<Quote>> {
    spawn_blocking(move || extract_blocking(&html)).await?
}

fn extract_blocking(html: &str) -> Result<Vec<Quote>> {
    let doc = Html::parse_document(html);

    let quote_selector = create_selector(r#"div[class="quote"]"#)?;
    let text_selector = create_selector(r#"span[class="text"]"#)?;
    let author_selector = create_selector(r#"small[class="author"]"#)?;
    let tag_selector = create_selector(r#"a[class="tag"]"#)?;

    // The site serves 10 quotes per page.
    let mut quotes = Vec::with_capacity(10);
    for block in doc.select(&quote_selector) {
        // A block missing its text or author is skipped, not fatal.
        let Some(text) = first_text(block, &text_selector) else {
            info_time!("skipped a quote block without text");
            continue;
        };
        let Some(author) = first_text(block, &author_selector) else {
            info_time!("skipped a quote block without an author");
            continue;
        };

        let mut tags: Vec<String> = Vec::new();
        for tag in block.select(&tag_selector) {
            let label = tag.inner_html().trim().to_string();
            if !label.is_empty() && !tags.contains(&label) {
                tags.push(label);
            }
        }

        quotes.push(Quote { text, author, tags });
    }

    Ok(quotes)
}

/// First matching element's inner text, trimmed.
/// `None` when the node is missing or blank.
fn first_text(block: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let node = block.select(selector).next()?;
    let text = node.inner_html().trim().to_string();
    (!text.is_empty()).then_some(text)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::BadSelector(sel_str.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <div class="quote">
            <span class="text">“Truth is rarely pure and never simple.”</span>
            <span>by <small class="author">Oscar Wilde</small></span>
            <div class="tags">
                <a class="tag">truth</a>
                <a class="tag">wit</a>
                <a class="tag">truth</a>
            </div>
        </div>
        <div class="quote">
            <span class="text">“Simplicity is the ultimate sophistication.”</span>
            <span>by <small class="author">Leonardo da Vinci</small></span>
            <div class="tags"></div>
        </div>
        </body></html>
    "#;

    #[tokio::test]
    async fn extracts_one_record_per_block() {
        let quotes = extract_quotes(PAGE.to_string()).await.unwrap();
        assert_eq!(quotes.len(), 2);
        for quote in &quotes {
            assert!(!quote.text.is_empty());
            assert!(!quote.author.is_empty());
        }
        assert_eq!(quotes[0].author, "Oscar Wilde");
        assert_eq!(quotes[1].author, "Leonardo da Vinci");
    }

    #[tokio::test]
    async fn tags_are_deduplicated_in_page_order() {
        let quotes = extract_quotes(PAGE.to_string()).await.unwrap();
        assert_eq!(quotes[0].tags, vec!["truth", "wit"]);
        assert!(quotes[1].tags.is_empty());
    }

    #[tokio::test]
    async fn a_block_without_an_author_is_skipped() {
        let html = r#"
            <div class="quote"><span class="text">“No author here.”</span></div>
            <div class="quote">
                <span class="text">“Kept.”</span>
                <small class="author">Someone</small>
            </div>
        "#;
        let quotes = extract_quotes(html.to_string()).await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].author, "Someone");
    }

    #[tokio::test]
    async fn a_blank_text_node_counts_as_malformed() {
        let html = r#"
            <div class="quote">
                <span class="text">   </span>
                <small class="author">Someone</small>
            </div>
        "#;
        let quotes = extract_quotes(html.to_string()).await.unwrap();
        assert!(quotes.is_empty());
    }

    #[tokio::test]
    async fn a_page_without_blocks_extracts_nothing() {
        let html = "<html><body><p>No quotes found!</p></body></html>";
        let quotes = extract_quotes(html.to_string()).await.unwrap();
        assert!(quotes.is_empty());
    }
}
