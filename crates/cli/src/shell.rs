// ABOUTME: Interactive menu session driving scrapes from stdin prompts.
// ABOUTME: Cycles an explicit idle -> running -> rendered state machine until quit.

use std::fs;
use std::io::{self, BufRead, Write};

use storescan_scrape::{Client, ResultTable, Site};

use crate::mode::Mode;

const MENU: &str = "\
1) Amazon product collection
2) Snapdeal product collection
3) Individual product reviews
q) Quit";

type StdinLines = io::Lines<io::StdinLock<'static>>;

/// Where the session currently is.
///
/// A scrape or save failure prints its error and drops back to `Idle`; the
/// session only ends on quit or end of input.
enum ShellState {
    /// Waiting at the menu for a job.
    Idle,
    /// A job is selected and about to run.
    Running { mode: Mode, url: String },
    /// A finished table is ready to show.
    Rendered { mode: Mode, table: ResultTable },
}

/// Runs the interactive session until the user quits.
pub fn run(client: &Client) -> io::Result<()> {
    let mut lines = io::stdin().lock().lines();
    let mut state = ShellState::Idle;

    loop {
        state = match state {
            ShellState::Idle => match read_job(&mut lines)? {
                Some((mode, url)) => ShellState::Running { mode, url },
                None => return Ok(()),
            },
            ShellState::Running { mode, url } => {
                println!("scraping {} from {}", mode.label(), url);
                match mode.run(client, &url) {
                    Ok(table) => ShellState::Rendered { mode, table },
                    Err(e) => {
                        eprintln!("error: {}", e);
                        print!("{}", mode.empty_table().render_text());
                        ShellState::Idle
                    }
                }
            }
            ShellState::Rendered { mode, table } => {
                print!("{}", table.render_text());
                if !table.is_empty() {
                    offer_save(&mut lines, mode, &table)?;
                }
                ShellState::Idle
            }
        };
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}

/// Reads the next job from the menu. Returns None on quit or end of input.
fn read_job(lines: &mut StdinLines) -> io::Result<Option<(Mode, String)>> {
    loop {
        println!("{}", MENU);
        prompt("> ")?;
        let choice = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let mode = match choice.trim() {
            "" => continue,
            "q" | "Q" => return Ok(None),
            "1" => Mode::Collection(Site::Amazon),
            "2" => Mode::Collection(Site::Snapdeal),
            "3" => match read_platform(lines)? {
                Some(site) => Mode::Reviews(site),
                None => return Ok(None),
            },
            other => {
                eprintln!("unknown choice '{}'", other);
                continue;
            }
        };

        prompt("url> ")?;
        let url = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let url = url.trim().to_string();
        if url.is_empty() {
            eprintln!("a URL is required");
            continue;
        }
        return Ok(Some((mode, url)));
    }
}

/// Asks which storefront a reviews job targets. Returns None on end of input.
fn read_platform(lines: &mut StdinLines) -> io::Result<Option<Site>> {
    loop {
        prompt("site (amazon/snapdeal)> ")?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        match Site::parse(line.trim()) {
            Some(site) => return Ok(Some(site)),
            None => eprintln!("unknown site '{}'", line.trim()),
        }
    }
}

/// Offers to write the rendered table to the mode's CSV file.
fn offer_save(lines: &mut StdinLines, mode: Mode, table: &ResultTable) -> io::Result<()> {
    let filename = mode.filename();
    prompt(&format!("save {}? [y/N]> ", filename))?;
    let answer = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };
    if matches!(answer.trim(), "y" | "Y") {
        match fs::write(&filename, table.to_csv()) {
            Ok(()) => println!("saved {}", filename),
            Err(e) => eprintln!("error writing {}: {}", filename, e),
        }
    }
    Ok(())
}
