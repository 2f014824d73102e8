// ABOUTME: CLI binary for the storescan storefront scraper.
// ABOUTME: Runs one scripted scrape from flags or an interactive menu session.

mod mode;
mod shell;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use storescan_scrape::Client;

use crate::mode::parse_mode;

#[derive(Parser, Debug)]
#[command(name = "storescan")]
#[command(about = "Scrape storefront listings and reviews into tables")]
struct Args {
    /// Scrape mode: amazon-collection, snapdeal-collection, or reviews
    #[arg(short = 'm', long = "mode")]
    mode: Option<String>,

    /// Storefront for reviews mode: amazon or snapdeal
    #[arg(short = 's', long = "site")]
    site: Option<String>,

    /// Page URL to scrape
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// Also save the table as CSV in the working directory
    #[arg(long = "save")]
    save: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // With no selection flags the tool runs as an interactive session
    if args.mode.is_none() && args.url.is_none() && args.site.is_none() {
        if args.save {
            eprintln!("error: --save is only valid together with --mode and --url");
            return ExitCode::from(1);
        }
        let client = Client::builder().build();
        return match shell::run(&client) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::from(1)
            }
        };
    }

    // Validate args
    let mode_str = match &args.mode {
        Some(mode) => mode,
        None => {
            eprintln!("error: --mode is required when using --url or --site");
            return ExitCode::from(1);
        }
    };
    let url = match &args.url {
        Some(url) => url,
        None => {
            eprintln!("error: --url is required when using --mode");
            return ExitCode::from(1);
        }
    };
    let mode = match parse_mode(mode_str, args.site.as_deref()) {
        Ok(mode) => mode,
        Err(msg) => {
            eprintln!("error: {}", msg);
            return ExitCode::from(1);
        }
    };

    let client = Client::builder().build();
    let table = match mode.run(&client, url) {
        Ok(table) => table,
        Err(e) => {
            // A failed fetch still shows the mode's (empty) table shape
            eprintln!("error: {}", e);
            print!("{}", mode.empty_table().render_text());
            return ExitCode::from(1);
        }
    };

    print!("{}", table.render_text());

    if args.save {
        if table.is_empty() {
            eprintln!("nothing to save: the table has no rows");
        } else {
            let filename = mode.filename();
            if let Err(e) = fs::write(&filename, table.to_csv()) {
                eprintln!("error writing {}: {}", filename, e);
                return ExitCode::from(1);
            }
            println!("saved {}", filename);
        }
    }

    ExitCode::SUCCESS
}
