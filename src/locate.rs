use reqwest::Client;

use crate::parse::{self, Quote};
use crate::{info_time, request, Error, Result, PROBE_ATTEMPTS};

/// Walks the site from page 1 until a page comes back without quotes and
/// returns the last page index that still had content.
/// One linear scan; only the boundary value is kept.
pub(crate) async fn find_max_page(client: &Client, base_url: &str) -> Result<usize> {
    info_time!("Looking for the last page, please wait");

    let mut max_page = 1;
    let mut candidate = 1;
    loop {
        let quotes = probe(client, base_url, candidate).await?;
        if quotes.is_empty() {
            info_time!("Last page: {max_page}");
            return Ok(max_page);
        }
        max_page = candidate;
        candidate += 1;
    }
}

/// A single probe: re-attempts the transport for the same page until it
/// succeeds, up to `PROBE_ATTEMPTS` times, then extracts whatever the page
/// holds. A page that never answers surfaces as `ProbeExhausted` rather
/// than an empty result, so an outage on an interior page is never
/// reported as the end of the site.
async fn probe(client: &Client, base_url: &str, page_num: usize) -> Result<Vec<Quote>> {
    for attempt in 1..=PROBE_ATTEMPTS {
        match request::fetch_page(client, base_url, page_num).await {
            Ok(html) => return parse::extract_quotes(html).await,
            Err(err) => {
                info_time!("page {page_num}, attempt {attempt}/{PROBE_ATTEMPTS}: {err}")
            }
        }
    }

    Err(Error::ProbeExhausted {
        page: page_num,
        attempts: PROBE_ATTEMPTS,
    })
}
