//! Interactive scraper for quotes.toscrape.com.
//!
//! A menu-driven session scrapes one page at a time, shows the extracted
//! quotes, and appends the current page to a local SQLite log on demand.

mod error;
mod locate;
mod macros;
mod parse;
pub mod process;
mod request;
mod session;
mod store;

pub use error::{Error, Result};

use std::time::Duration;

const BASE_URL: &str = "http://quotes.toscrape.com/";
const DB_FILE: &str = "scrapes.db";
/// Timeout for a single request; nothing retries except the page probe.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// How many times a probe re-attempts the same page before giving up.
const PROBE_ATTEMPTS: usize = 10;
