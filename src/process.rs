use std::io::{self, Write};
use std::path::Path;

use crate::session::Session;
use crate::{store, Error, Result, BASE_URL, DB_FILE};

const MENU: &str = "
------------------------------------------------------------------
>>>=============== WELCOME TO THE QUOTE SCRAPER ===============<<<
------------------------------------------------------------------

1. Scrape the website (restarts from page 1)
2. Scrape the next page
3. Print just quotes
4. Print just authors
5. Print just tags
6. Print quotes with their authors and tags
7. Save the current page to the database
8. Exit
";

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Restart,
    Advance,
    ViewQuotes,
    ViewAuthors,
    ViewTags,
    ViewCombined,
    Persist,
    Exit,
}

impl Command {
    /// Accepts the menu number, or `exit` as an alias for the last entry.
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Restart),
            "2" => Some(Self::Advance),
            "3" => Some(Self::ViewQuotes),
            "4" => Some(Self::ViewAuthors),
            "5" => Some(Self::ViewTags),
            "6" => Some(Self::ViewCombined),
            "7" => Some(Self::Persist),
            "8" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the interactive loop until the user exits (or stdin closes).
/// Every failure is surfaced here and the loop keeps going.
pub async fn run() -> Result<()> {
    // A broken database is reported, not fatal; saving will fail later
    // with its own error.
    if let Err(err) = store::init(Path::new(DB_FILE)) {
        println!("ERROR: {err}");
    }
    let mut session = Session::new(BASE_URL)?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{MENU}\n-> Please type your input: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let input = line.trim().to_lowercase();

        let Some(command) = Command::parse(&input) else {
            println!("\nPlease only enter one of the listed options.\n");
            continue;
        };
        if command == Command::Exit {
            println!("\nBye!\n");
            break;
        }

        if let Err(err) = dispatch(&mut session, command).await {
            report(&session, &err);
        }
    }

    Ok(())
}

/// Executes a single command against the session.
async fn dispatch(session: &mut Session, command: Command) -> Result<()> {
    match command {
        Command::Restart => {
            let data = session.restart().await?;
            println!(
                "\nScraped {} quotes from page {}\n",
                data.quotes.len(),
                data.page
            );
        }
        Command::Advance => {
            let data = session.advance().await?;
            println!(
                "\nScraped {} quotes from page {}\n",
                data.quotes.len(),
                data.page
            );
        }
        Command::ViewQuotes => {
            for text in session.quotes()? {
                println!("Quote: {text}\n");
            }
        }
        Command::ViewAuthors => {
            for author in session.authors()? {
                println!("Author: {author}\n");
            }
        }
        Command::ViewTags => {
            for tag in session.tags()? {
                println!("Tag: {tag}\n");
            }
        }
        Command::ViewCombined => {
            for quote in session.combined()? {
                println!("{:-<100}", "");
                println!("Quote: {}", quote.text);
                println!("By: {}\n", quote.author);
                println!("Tags: {}", quote.tags.join(", "));
                println!("{:-<100}\n", "");
            }
        }
        Command::Persist => {
            let rows = session.persist(Path::new(DB_FILE))?;
            println!("\nSaved {rows} rows to {DB_FILE}\n");
        }
        // Handled by the loop before dispatch.
        Command::Exit => {}
    }
    Ok(())
}

/// User mistakes read as hints, everything else as errors.
fn report(session: &Session, err: &Error) {
    if err.is_user_input() {
        println!("\n{err}\n");
    } else if session.current_page() > 0 {
        println!("\nERROR: {err}");
        println!("Still on page {}.\n", session.current_page());
    } else {
        println!("\nERROR: {err}\n");
    }
}
