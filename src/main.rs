use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use lexicon::cli::Session;
use lexicon::{FileFormat, Wordlist};


/// Interactively add, remove, and search words in a lexicon.
#[derive(StructOpt)]
struct Cli {
    /// Word files to load before the prompt, one word per line
    #[structopt(parse(from_os_str))]
    files: Vec<PathBuf>,
    /// Field separator for word files with several columns
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is given
    #[structopt(short, long, default_value = "0")]
    word_column: usize,
    /// Print word lists as JSON arrays
    #[structopt(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Cli::from_args();
    let format = match args.delimiter {
        Some(d) => FileFormat::builder().delimiter(d).word_column(args.word_column).build(),
        None => FileFormat::default(),
    };

    let mut session = Session::new(Wordlist::new(), format, args.json, io::stdout());
    for path in &args.files {
        session.load(&path.to_string_lossy())?;
    }
    println!("Welcome to the Lexicon Tester!\nPress <return> for list of commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nEnter command: ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if !session.execute(&line)? {
            break;
        }
    }
    Ok(())
}
