use std::path::Path;

use rusqlite::{params, Connection};

use crate::parse::Quote;
use crate::Result;

/// Creates the scrape log if it does not exist yet.
/// Safe to call on every start.
pub(crate) fn init(db_path: &Path) -> Result<()> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS scrapes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            quote TEXT NOT NULL,
            author TEXT NOT NULL,
            tags TEXT NOT NULL,
            page INTEGER NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
    )?;
    Ok(())
}

/// Appends one row per quote, all inside a single transaction: either the
/// whole page lands in the log or none of it does. Returns the row count.
/// Tags are comma-joined; a tag that itself contains a comma is a known
/// lossy case.
pub(crate) fn append(db_path: &Path, page: usize, quotes: &[Quote]) -> Result<usize> {
    let mut conn = Connection::open(db_path)?;
    let tx = conn.transaction()?;
    {
        let mut stmt =
            tx.prepare("INSERT INTO scrapes (quote, author, tags, page) VALUES (?1, ?2, ?3, ?4)")?;
        for quote in quotes {
            stmt.execute(params![
                quote.text,
                quote.author,
                quote.tags.join(", "),
                page as i64
            ])?;
        }
    }
    tx.commit()?;
    Ok(quotes.len())
}
