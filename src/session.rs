use std::collections::BTreeSet;
use std::path::Path;

use reqwest::Client;

use crate::parse::{self, Quote};
use crate::{locate, request, store, Error, Result};

/// The quotes scraped off a single page.
#[derive(Debug, Clone)]
pub(crate) struct PageData {
    pub page: usize,
    pub quotes: Vec<Quote>,
}

/// One interactive scraping session.
///
/// Tracks the page the user is on, the quotes scraped from it and the
/// lazily discovered last page of the site. The cache and the page pointer
/// only ever move together, on a successful fetch; `max_page`, once
/// resolved, stays put for the rest of the session.
pub(crate) struct Session {
    client: Client,
    base_url: String,
    current_page: usize,
    cache: Option<PageData>,
    max_page: Option<usize>,
}

impl Session {
    /// A fresh session: nothing scraped yet.
    pub(crate) fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: request::build_client()?,
            base_url: base_url.into(),
            current_page: 0,
            cache: None,
            max_page: None,
        })
    }

    pub(crate) fn current_page(&self) -> usize {
        self.current_page
    }

    /// Scrapes page 1 again, dropping whatever was cached before.
    /// On failure nothing changes, including an already resolved `max_page`.
    pub(crate) async fn restart(&mut self) -> Result<&PageData> {
        let quotes = self.scrape(1).await?;
        self.current_page = 1;
        Ok(self.cache.insert(PageData { page: 1, quotes }))
    }

    /// Moves one page forward. The first call discovers the last page of
    /// the site and memoizes it, so navigation never walks past the end.
    pub(crate) async fn advance(&mut self) -> Result<&PageData> {
        let max_page = match self.max_page {
            Some(max) => max,
            None => {
                let max = locate::find_max_page(&self.client, &self.base_url).await?;
                self.max_page = Some(max);
                max
            }
        };

        let target = self.current_page + 1;
        if target > max_page {
            return Err(Error::AtLastPage(max_page));
        }

        let quotes = self.scrape(target).await?;
        self.current_page = target;
        Ok(self.cache.insert(PageData { page: target, quotes }))
    }

    /// Quote texts of the cached page.
    pub(crate) fn quotes(&self) -> Result<impl Iterator<Item = &str>> {
        Ok(self.cached()?.quotes.iter().map(|q| q.text.as_str()))
    }

    /// Author names of the cached page.
    pub(crate) fn authors(&self) -> Result<impl Iterator<Item = &str>> {
        Ok(self.cached()?.quotes.iter().map(|q| q.author.as_str()))
    }

    /// Every tag on the cached page, deduplicated and sorted.
    pub(crate) fn tags(&self) -> Result<BTreeSet<&str>> {
        let data = self.cached()?;
        Ok(data
            .quotes
            .iter()
            .flat_map(|q| q.tags.iter().map(String::as_str))
            .collect())
    }

    /// The cached page in full.
    pub(crate) fn combined(&self) -> Result<&[Quote]> {
        Ok(&self.cached()?.quotes)
    }

    /// Appends the cached page to the database and returns the row count.
    /// Every call writes a fresh batch; saving the same page twice leaves
    /// two batches in the log.
    pub(crate) fn persist(&self, db_path: &Path) -> Result<usize> {
        let data = self.cached()?;
        store::append(db_path, data.page, &data.quotes)
    }

    fn cached(&self) -> Result<&PageData> {
        self.cache.as_ref().ok_or(Error::NothingScraped)
    }

    /// Fetch + extract with zero retries.
    async fn scrape(&self, page_num: usize) -> Result<Vec<Quote>> {
        let html = request::fetch_page(&self.client, &self.base_url, page_num).await?;
        parse::extract_quotes(html).await
    }
}
