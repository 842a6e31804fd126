use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong during a scraping session.
/// None of these are fatal: the command loop surfaces them and carries on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("the request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Transport(String),

    #[error("Malformed selector: {0}")]
    BadSelector(String),

    #[error("gave up on page {page} after {attempts} failed attempts")]
    ProbeExhausted { page: usize, attempts: usize },

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("please scrape the website first (option 1)")]
    NothingScraped,
    #[error("already at last page ({0})")]
    AtLastPage(usize),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("couldn't await the parsing task: {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),
}

impl Error {
    /// User mistakes, as opposed to transport or storage failures.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Error::NothingScraped | Error::AtLastPage(_))
    }
}

/// Transport failures are classified so the caller can tell a timeout from
/// a refused connection or a bad status code.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            Error::HttpStatus(status)
        } else {
            Error::Transport(err.to_string())
        }
    }
}
